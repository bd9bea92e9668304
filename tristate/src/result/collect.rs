use super::Result;

/// Collects values out of a sequence of results.
///
/// The first error stops iteration and becomes the outcome. Empty results
/// contribute nothing.
impl<Value, Code, Collection> FromIterator<Result<Value, Code>> for Result<Collection, Code>
where
    Collection: FromIterator<Value>,
{
    fn from_iter<I: IntoIterator<Item = Result<Value, Code>>>(iter: I) -> Self {
        let mut failure = None;

        let collection = iter
            .into_iter()
            .map_while(|item| match item {
                Result::Empty => Some(None),
                Result::Value(value) => Some(Some(value)),
                Result::Error(info) => {
                    failure = Some(info);
                    None
                }
            })
            .flatten()
            .collect();

        match failure {
            Some(info) => Self::Error(info),
            None => Self::Value(collection),
        }
    }
}
