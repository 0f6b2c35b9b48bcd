use uuid::Uuid;

/// Parent of a concept container (source, collection, repo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerOwner {
    User(Uuid),
    Organization(Uuid),
}

impl ContainerOwner {
    pub fn id(&self) -> Uuid {
        match self {
            Self::User(id) | Self::Organization(id) => *id,
        }
    }
}
