/// A possibly qualified SQL name.
///
/// Rendering quotes each part and joins them with periods.
#[derive(Debug, Clone)]
pub struct Name(pub Vec<String>);

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}
