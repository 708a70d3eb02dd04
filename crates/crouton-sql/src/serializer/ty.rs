use super::ToSql;

use crouton_core::schema::db;

impl ToSql for &db::Type {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let spelling = f.serializer.capability.storage_types.spelling(*self);
        fmt!(f, spelling);
    }
}
