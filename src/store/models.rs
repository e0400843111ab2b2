use diesel::prelude::*;
use serde::Deserialize;

#[derive(Queryable, Selectable, Insertable, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::kinases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Kinase {
    pub gene_symbol: String,
    pub full_name: String,
    pub uniprot_code: String,
    pub family: String,
    pub cell_location: String,
}

#[derive(Queryable, Selectable, Insertable, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::inhibitors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Inhibitor {
    pub name: String,
    pub chemical_structure: String,
    pub molecular_weight: i32,
    pub chemical_image: String,
}

/// One row of the many-to-many join between kinases and inhibitors.
#[derive(Queryable, Insertable, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::kinase_inhibitors)]
pub struct KinaseInhibitor {
    pub gene_symbol: String,
    pub inhibitor: String,
}
