use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Which pane is visible: exactly one of list or detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "view", content = "id", rename_all = "lowercase")]
pub enum ViewTarget {
    #[default]
    List,
    Detail(ItemId),
}

impl ViewTarget {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }

    pub fn detail_id(&self) -> Option<&ItemId> {
        match self {
            Self::List => None,
            Self::Detail(id) => Some(id),
        }
    }
}
