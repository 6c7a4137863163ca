//! Client-facing messages.
//!
//! The registry serves Brazilian breeders, so every message returned in a
//! response body is Portuguese. Log lines stay in English.

/// No horse exists in the registry at all.
pub const NO_HORSES_REGISTERED: &str = "Não existem animais cadastrados!";

/// No horse matches the requested name.
pub const NO_HORSES_WITH_NAME: &str = "Não existem animais cadastrados com o nome informado!";

/// The requested parent has no registered offspring.
pub const NO_OFFSPRING_REGISTERED: &str = "Este animal não possue filhos cadastrados!";

/// The caller's profile may not change registry records.
pub const USER_NOT_AUTHORIZED: &str = "Usuário não autorizado!";

/// `limit` fell outside the accepted range.
pub const LIMIT_OUT_OF_RANGE: &str =
    "O valor para o parâmetro 'limit' deve estar entre 10 e 50!";

/// `offset` was negative.
pub const NEGATIVE_OFFSET: &str = "O valor para o parâmetro 'offset' não pode ser menor que zero!";
