use core::fmt;

use tracing::{error, trace};

use crate::errors::{AccessError, ErrorInfo};

mod collect;

/// Names the state a [`Result`] currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Content {
    /// No outcome was ever assigned.
    Empty,
    Value,
    Error,
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty",
            Self::Value => "value",
            Self::Error => "error",
        })
    }
}

/// The outcome of an operation that may fail: nothing yet, a success
/// value, or an [`ErrorInfo`].
///
/// A `Result` holds exactly one of the three at any time. The default is
/// [`Result::Empty`], which is not the same as holding a default value.
///
/// # Examples
///
/// ```
/// use tristate::{Content, ErrorInfo, Result};
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// enum Code {
///     #[default]
///     Unknown,
///     Invalid,
/// }
///
/// let doubled = Result::<i32, Code>::from_value(5).on_success(|v| Result::from_value(v * 2));
/// assert_eq!(doubled.get(), &10);
///
/// let failed = Result::<i32, Code>::from_error(ErrorInfo::from_code(Code::Invalid))
///     .on_success(|v| Result::from_value(v * 2));
/// assert_eq!(failed.content(), Content::Error);
/// assert_eq!(failed.recover(|_| -1), -1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Result<Value, Code> {
    Empty,
    Value(Value),
    Error(ErrorInfo<Code>),
}

impl<Value, Code> Default for Result<Value, Code> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<Value, Code> Result<Value, Code> {
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    pub const fn from_value(value: Value) -> Self {
        Self::Value(value)
    }

    pub const fn from_error(info: ErrorInfo<Code>) -> Self {
        Self::Error(info)
    }

    /// Which state is active. Read straight off the discriminant.
    #[must_use]
    pub const fn content(&self) -> Content {
        match self {
            Self::Empty => Content::Empty,
            Self::Value(_) => Content::Value,
            Self::Error(_) => Content::Error,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the held value.
    ///
    /// Prefer [`try_get`](Self::try_get), [`match_with`](Self::match_with) or
    /// [`recover`](Self::recover) unless the state is already known.
    ///
    /// # Panics
    ///
    /// Panics with an [`AccessError`] message if the result does not hold a value.
    #[must_use]
    #[track_caller]
    pub fn get(&self) -> &Value {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => {
                error!(expected = %Content::Value, actual = %err.actual(), "wrong-state access");
                panic!("{err}");
            }
        }
    }

    /// Returns the held error.
    ///
    /// # Panics
    ///
    /// Panics with an [`AccessError`] message if the result does not hold an error.
    #[must_use]
    #[track_caller]
    pub fn error(&self) -> &ErrorInfo<Code> {
        match self.try_error() {
            Ok(info) => info,
            Err(err) => {
                error!(expected = %Content::Error, actual = %err.actual(), "wrong-state access");
                panic!("{err}");
            }
        }
    }

    /// Returns the held value, or the [`AccessError`] describing what is held instead.
    pub const fn try_get(&self) -> core::result::Result<&Value, AccessError> {
        match self {
            Self::Value(value) => Ok(value),
            _ => Err(AccessError::NotValue {
                actual: self.content(),
            }),
        }
    }

    pub const fn try_error(&self) -> core::result::Result<&ErrorInfo<Code>, AccessError> {
        match self {
            Self::Error(info) => Ok(info),
            _ => Err(AccessError::NotError {
                actual: self.content(),
            }),
        }
    }

    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn error_info(&self) -> Option<&ErrorInfo<Code>> {
        match self {
            Self::Error(info) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<ErrorInfo<Code>> {
        match self {
            Self::Error(info) => Some(info),
            _ => None,
        }
    }

    /// Borrows the value, cloning the error so the original stays untouched.
    #[must_use]
    pub fn as_ref(&self) -> Result<&Value, Code>
    where
        Code: Clone,
    {
        match self {
            Self::Empty => Result::Empty,
            Self::Value(value) => Result::Value(value),
            Self::Error(info) => Result::Error(info.clone()),
        }
    }

    /// Calls `on_value` or `on_error` depending on the state.
    ///
    /// At most one callback runs. An empty result runs neither.
    pub fn match_with<V, E>(&self, on_value: V, on_error: E)
    where
        V: FnOnce(&Value),
        E: FnOnce(&ErrorInfo<Code>),
    {
        match self {
            Self::Empty => {}
            Self::Value(value) => on_value(value),
            Self::Error(info) => on_error(info),
        }
    }

    /// Chains a fallible step onto a successful result.
    ///
    /// `apply` runs only when a value is held, and its output becomes the new
    /// result. An error is carried over unchanged and an empty result stays
    /// empty; in both cases `apply` is never called.
    pub fn on_success<NewValue, F>(self, apply: F) -> Result<NewValue, Code>
    where
        F: FnOnce(Value) -> Result<NewValue, Code>,
    {
        match self {
            Self::Value(value) => apply(value),
            Self::Error(info) => {
                trace!("on_success short-circuited on error");
                Result::Error(info)
            }
            Self::Empty => {
                trace!("on_success short-circuited on empty");
                Result::Empty
            }
        }
    }

    /// Like [`on_success`](Self::on_success) for steps that cannot fail.
    pub fn map<NewValue, F>(self, apply: F) -> Result<NewValue, Code>
    where
        F: FnOnce(Value) -> NewValue,
    {
        self.on_success(|value| Result::Value(apply(value)))
    }

    /// Transforms the error, leaving values and emptiness alone.
    pub fn map_error<NewCode, F>(self, apply: F) -> Result<Value, NewCode>
    where
        F: FnOnce(ErrorInfo<Code>) -> ErrorInfo<NewCode>,
    {
        match self {
            Self::Empty => Result::Empty,
            Self::Value(value) => Result::Value(value),
            Self::Error(info) => Result::Error(apply(info)),
        }
    }

    /// Unwraps into a plain value, turning an error into a fallback with
    /// `apply`. An empty result yields `Value::default()`.
    pub fn recover<F>(self, apply: F) -> Value
    where
        F: FnOnce(ErrorInfo<Code>) -> Value,
        Value: Default,
    {
        match self {
            Self::Value(value) => value,
            Self::Error(info) => {
                trace!("recovering from error");
                apply(info)
            }
            Self::Empty => {
                trace!("recovering from empty result with the default value");
                Value::default()
            }
        }
    }

    /// Replaces an error with whatever `apply` returns. Values and empty
    /// results pass through.
    pub fn recover_with<F>(self, apply: F) -> Self
    where
        F: FnOnce(ErrorInfo<Code>) -> Self,
    {
        match self {
            Self::Error(info) => {
                trace!("recovering from error into a new result");
                apply(info)
            }
            other => other,
        }
    }

    /// Converts into the standard library result. An empty result has no
    /// counterpart there and becomes `None`.
    ///
    /// ```
    /// use tristate::{ErrorInfo, Result};
    ///
    /// fn parse(input: &str) -> Result<u8, ()> {
    ///     match input.parse::<u8>() {
    ///         Ok(value) => Result::from_value(value),
    ///         Err(_) => Result::from_error(ErrorInfo::from_message("not a number")),
    ///     }
    /// }
    ///
    /// fn sum(a: &str, b: &str) -> core::result::Result<u8, ErrorInfo<()>> {
    ///     let a = parse(a).into_std().unwrap_or(Ok(0))?;
    ///     let b = parse(b).into_std().unwrap_or(Ok(0))?;
    ///     Ok(a + b)
    /// }
    ///
    /// assert_eq!(sum("1", "2"), Ok(3));
    /// assert!(sum("1", "x").is_err());
    /// ```
    pub fn into_std(self) -> Option<core::result::Result<Value, ErrorInfo<Code>>> {
        match self {
            Self::Empty => None,
            Self::Value(value) => Some(Ok(value)),
            Self::Error(info) => Some(Err(info)),
        }
    }
}

impl<Value, Code> From<ErrorInfo<Code>> for Result<Value, Code> {
    fn from(info: ErrorInfo<Code>) -> Self {
        Self::Error(info)
    }
}

impl<Value, Code> From<core::result::Result<Value, ErrorInfo<Code>>> for Result<Value, Code> {
    fn from(result: core::result::Result<Value, ErrorInfo<Code>>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(info) => Self::Error(info),
        }
    }
}

impl<Value, Code> From<Option<Value>> for Result<Value, Code> {
    fn from(option: Option<Value>) -> Self {
        option.map_or(Self::Empty, Self::Value)
    }
}

/// Free-standing form of [`Result::match_with`].
pub fn match_with<Value, Code, V, E>(result: &Result<Value, Code>, on_value: V, on_error: E)
where
    V: FnOnce(&Value),
    E: FnOnce(&ErrorInfo<Code>),
{
    result.match_with(on_value, on_error);
}
