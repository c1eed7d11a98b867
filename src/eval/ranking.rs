use serde::{Deserialize, Serialize};

use crate::domain::{Hand, PlayerId};

/// Результат ранжирования: группы рук от сильнейшей к слабейшей.
/// Руки равной силы лежат в одной группе.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedHands {
    groups: Vec<Vec<Hand>>,
}

impl RankedHands {
    /// Пустые группы отбрасываются.
    pub fn from_groups(groups: Vec<Vec<Hand>>) -> Self {
        Self {
            groups: groups.into_iter().filter(|g| !g.is_empty()).collect(),
        }
    }

    pub fn groups(&self) -> &[Vec<Hand>] {
        &self.groups
    }

    /// Сильнейшая группа (победители).
    pub fn winners(&self) -> &[Hand] {
        self.groups.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn winner_ids(&self) -> Vec<PlayerId> {
        self.winners().iter().map(Hand::player_id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }
}
