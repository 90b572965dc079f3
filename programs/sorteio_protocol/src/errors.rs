use anchor_lang::prelude::*;

#[error_code]
pub enum SorteioError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Protocol paused")]
    Paused,

    #[msg("No valid draw day within the scan window")]
    NoValidDrawDay,
    #[msg("Reference day is not a valid draw day")]
    InvalidReferenceDay,
    #[msg("Reference concurso must be positive")]
    InvalidReferenceConcurso,

    #[msg("Draw does not match the currently open schedule")]
    DrawMismatch,
    #[msg("Concurso must be greater than the last opened one")]
    ConcursoRegression,
    #[msg("Draw PDA mismatch")]
    DrawPdaMismatch,
    #[msg("Entry PDA mismatch")]
    EntryPdaMismatch,
    #[msg("Entry does not belong to this draw")]
    EntryDrawMismatch,

    #[msg("Registration window not open yet")]
    RegistrationNotOpen,
    #[msg("Registration window closed")]
    RegistrationClosed,

    #[msg("Game ID must be exactly 10 decimal digits")]
    InvalidGameId,
    #[msg("WhatsApp contact must contain digits only")]
    InvalidWhatsapp,
    #[msg("Platform tag is empty or too long")]
    InvalidPlatform,
    #[msg("Must pick between 5 and 20 numbers")]
    InvalidNumberCount,
    #[msg("Number out of the 1..=80 range")]
    NumberOutOfRange,
    #[msg("Duplicate number in selection")]
    DuplicateNumber,

    #[msg("Unknown status code")]
    InvalidStatusCode,
    #[msg("Unknown validity code")]
    InvalidValidityCode,

    #[msg("Winning result already published for this draw")]
    ResultAlreadySet,
    #[msg("Winning result not published yet")]
    ResultNotSet,
    #[msg("Cannot publish a result before the cutoff")]
    ResultTooEarly,

    #[msg("Entry already settled")]
    AlreadySettled,
    #[msg("Entry not settled yet")]
    NotSettled,
    #[msg("Batch contains entries from another platform's pool")]
    MixedPlatformBatch,
    #[msg("Too many entries")]
    TooManyEntries,
    #[msg("Prize pool does not belong to this draw")]
    PoolDrawMismatch,

    #[msg("Draw already finalized")]
    AlreadyFinalized,
    #[msg("Draw not finalized")]
    NotFinalized,
    #[msg("Cannot finalize while entries remain unsettled")]
    EntriesNotSettled,

    #[msg("Failed to borrow account data")]
    AccountBorrowFailed,

    #[msg("Math overflow")]
    MathOverflow,
}
