use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};

/// The phosphosite columns a browse query may filter on. The string forms
/// match the dataset header; the spellings with a space before the sign
/// are accepted on parse as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Column {
    #[strum(to_string = "Substrate")]
    Substrate,
    #[strum(to_string = "Kinase")]
    Kinase,
    #[strum(to_string = "Sequence(-)", serialize = "Sequence (-)")]
    SequenceMinus,
    #[strum(to_string = "Sequence(+)", serialize = "Sequence (+)")]
    SequencePlus,
    #[strum(to_string = "Locus")]
    Locus,
}

/// One phosphorylation site row. The kinase gene refers to the Kinase
/// table informally; the two datasets are kept in sync upstream and no
/// foreign key is enforced here.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhosphoRecord {
    #[serde(rename = "Substrate")]
    pub substrate: String,
    #[serde(rename = "Kinase")]
    pub kinase: String,
    #[serde(rename = "Sequence(-)")]
    pub sequence_minus: String,
    #[serde(rename = "Sequence(+)")]
    pub sequence_plus: String,
    #[serde(rename = "Locus")]
    pub locus: String,
}

impl PhosphoRecord {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Substrate => &self.substrate,
            Column::Kinase => &self.kinase,
            Column::SequenceMinus => &self.sequence_minus,
            Column::SequencePlus => &self.sequence_plus,
            Column::Locus => &self.locus,
        }
    }
}
