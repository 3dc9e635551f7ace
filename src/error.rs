use thiserror::Error;

/// An upstream type name that does not name one of the 18 element types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element type `{name}`")]
pub struct ParseElementError {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefendingTypesError {
    #[error("a defending combination needs at least one type")]
    Empty,

    #[error("a defending combination has at most two types, got {0}")]
    TooMany(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form record for pokemon {pokemon_id} has an empty internal name")]
    EmptyInternalName { pokemon_id: u32 },
}
