use super::{Formatter, ToSql};

/// A double-quoted SQL identifier, written verbatim.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('"');
        f.dst.push_str(self.0.as_ref());
        f.dst.push('"');
    }
}
