use super::{app, db, mapping, Mapping, Schema};
use crate::{Error, Result};

use std::{collections::HashSet, sync::Arc};

/// Lowers registered model descriptors into database tables.
#[derive(Debug, Default)]
pub struct Builder {
    /// Model descriptors, in registration order
    models: Vec<app::Model>,

    /// When set, prepended to every lowered table name
    table_name_prefix: Option<String>,
}

impl Builder {
    /// Register a model descriptor with the schema.
    pub fn register(&mut self, model: app::Model) -> &mut Self {
        self.models.push(model);
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Lower every registered model to a table.
    ///
    /// Rejects model sets that cannot be lowered (a model with no fields,
    /// duplicate field names, duplicate table names). Generation later on
    /// consults the built schema read-only and cannot fail.
    pub fn build(self) -> Result<Schema> {
        let mut tables = Vec::with_capacity(self.models.len());
        let mut mapping = Mapping::default();
        let mut table_names = HashSet::new();

        for model in &self.models {
            let table = self.build_table(model, db::TableId(tables.len()))?;

            if !table_names.insert(table.name.clone()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate table name `{}`",
                    table.name
                )));
            }

            mapping.insert(model.id, mapping::Model { table: table.id });
            tables.push(table);
        }

        let mut app = app::Schema::default();
        for model in self.models {
            app.models.insert(model.id, model);
        }

        Ok(Schema {
            app,
            db: Arc::new(db::Schema { tables }),
            mapping,
        })
    }

    fn build_table(&self, model: &app::Model, id: db::TableId) -> Result<db::Table> {
        if model.fields.is_empty() {
            return Err(Error::invalid_schema(format!(
                "model `{}` declares no fields",
                model.name
            )));
        }

        let mut table = db::Table::new(id, self.table_name(model));
        let mut field_names = HashSet::new();
        let mut has_primary_key = false;

        for field in &model.fields {
            if !field_names.insert(field.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` declares field `{}` more than once",
                    model.name, field.name
                )));
            }

            // A field carrying the configured identifier name backs the
            // primary key directly. The field's declared type wins over any
            // identifier type override.
            let primary_key = field.name == model.id_column.name;
            has_primary_key |= primary_key;

            table.columns.push(db::Column {
                id: db::ColumnId {
                    table: id,
                    index: table.columns.len(),
                },
                name: field.name.clone(),
                ty: db::Type::from_app(field.ty),
                nullable: false,
                primary_key,
                auto_increment: false,
            });
        }

        // No declared field backs the identifier; append a synthetic
        // auto-increment column.
        if !has_primary_key {
            table.columns.push(db::Column {
                id: db::ColumnId {
                    table: id,
                    index: table.columns.len(),
                },
                name: model.id_column.name.clone(),
                ty: db::Type::from_app(model.id_column.ty),
                nullable: false,
                primary_key: true,
                auto_increment: true,
            });
        }

        Ok(table)
    }

    fn table_name(&self, model: &app::Model) -> String {
        let base = match &model.table_name {
            Some(name) => name.clone(),
            None => model.name.pluralized(),
        };

        match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{base}"),
            None => base,
        }
    }
}
