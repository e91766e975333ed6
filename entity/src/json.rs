use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// A list of strings persisted as a JSON array column.
///
/// Used for skills, tech stacks, requirements and specialties.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<StringList> for Vec<String> {
    fn from(list: StringList) -> Self {
        list.0
    }
}
