use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Внешняя идентичность игрока: стабильный id, имя и кошелёк.
/// Банкроллом управляет внешний слой, здесь только данные.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: PlayerId,
    pub name: String,
    pub wallet: Chips,
}

/// Реестр клиентов. Передаётся в код настройки стола явно,
/// никакого глобального состояния.
#[derive(Debug)]
pub struct ClientRegistry {
    next_id: PlayerId,
    clients: HashMap<PlayerId, Client>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            clients: HashMap::new(),
        }
    }

    /// Зарегистрировать клиента и выдать ему новый id.
    pub fn register(&mut self, name: impl Into<String>, wallet: Chips) -> Client {
        let id = self.next_id;
        self.next_id += 1;

        let client = Client {
            id,
            name: name.into(),
            wallet,
        };
        self.clients.insert(id, client.clone());
        client
    }

    pub fn get(&self, id: PlayerId) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}
