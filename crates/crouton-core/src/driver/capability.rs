use crate::schema::db;

/// Describes the connected database so statement rendering can adapt to it.
#[derive(Debug)]
pub struct Capability {
    /// Keyword spelling for each column storage type
    pub storage_types: StorageTypes,
}

/// How a database dialect spells each column storage type.
#[derive(Debug)]
pub struct StorageTypes {
    pub boolean: &'static str,
    pub integer: &'static str,
    pub double: &'static str,
    pub text: &'static str,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        storage_types: StorageTypes::SQLITE,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        storage_types: StorageTypes::POSTGRESQL,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        storage_types: StorageTypes::MYSQL,
    };
}

impl StorageTypes {
    /// SQLite storage types.
    ///
    /// SQLite treats declared types as affinities rather than constraints;
    /// these are the conventional spellings.
    pub const SQLITE: StorageTypes = StorageTypes {
        boolean: "BOOLEAN",
        integer: "INTEGER",
        double: "REAL",
        text: "TEXT",
    };

    pub const POSTGRESQL: StorageTypes = StorageTypes {
        boolean: "BOOLEAN",
        integer: "BIGINT",
        double: "DOUBLE PRECISION",
        text: "TEXT",
    };

    pub const MYSQL: StorageTypes = StorageTypes {
        boolean: "BOOLEAN",
        integer: "BIGINT",
        double: "DOUBLE",
        text: "TEXT",
    };

    /// The dialect's spelling of a storage type.
    pub fn spelling(&self, ty: db::Type) -> &'static str {
        match ty {
            db::Type::Boolean => self.boolean,
            db::Type::Integer => self.integer,
            db::Type::Double => self.double,
            db::Type::Text => self.text,
        }
    }
}
