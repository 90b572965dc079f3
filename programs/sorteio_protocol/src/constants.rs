// Centralized Protocol Constants

// Civil Calendar Constants
// ========================

/// Fixed offset of the draw calendar (BRT, UTC-3). Draws follow the
/// Brazilian civil day regardless of validator or client locale. No DST is
/// ever applied.
pub const UTC_OFFSET_SECS: i64 = -3 * 3600;

pub const SECS_PER_DAY: i64 = 86_400;
pub const SECS_PER_HOUR: i64 = 3_600;

/// Regular draw hour (civil time). 20:00 BRT.
pub const STANDARD_DRAW_HOUR: u8 = 20;

/// Early draw hour used on Dec-24 and Dec-31. 17:00 BRT.
pub const EARLY_DRAW_HOUR: u8 = 17;

/// Upper bound for forward scans when resolving the next valid draw day.
/// The calendar only produces short gaps (a Sunday plus at most two holiday
/// closures), so exhausting this bound means the calendar rules or the
/// reference anchor are broken. Treated as fatal.
pub const MAX_SCHEDULE_SCAN_DAYS: i64 = 14;

/// Registration for a draw opens at 20:00:01 (civil) on the previous day.
pub const REG_OPEN_SECOND_OF_DAY: i64 = 20 * SECS_PER_HOUR + 1;

// Game Shape
// ==========

/// A submission picks between 5 and 20 distinct numbers.
pub const MIN_PICKS: usize = 5;
pub const MAX_PICKS: usize = 20;

/// Every draw publishes exactly 5 winning numbers.
pub const DRAWN_NUMBERS: usize = 5;

/// Playable number range, inclusive.
pub const NUMBER_MIN: u8 = 1;
pub const NUMBER_MAX: u8 = 80;

// Payload Limits
// ==============

/// Game IDs are exactly 10 decimal digits.
pub const GAME_ID_LEN: usize = 10;

/// Platform tag, e.g. "POPN1" / "POPLUZ". Prize pools never cross platforms.
pub const MAX_PLATFORM_LEN: usize = 12;

/// WhatsApp contact, digits only. May be empty.
pub const MAX_WHATSAPP_LEN: usize = 16;

/// Max entries per settle batch.
pub const MAX_BATCH: usize = 16;

/// A draw that never received a result is treated as annulled once this
/// much time has passed since its cutoff, unlocking rent recovery.
pub const ANNULLED_DRAW_GRACE_SECS: i64 = SECS_PER_DAY;

// Reference Anchor Defaults
// =========================

/// Concurso number assigned to the reference draw day. Together with
/// [`DEFAULT_REFERENCE_EPOCH_DAY`] this anchors the bijection between valid
/// draw days and concurso numbers. Stored into Config at initialization;
/// an operator can re-anchor without redeploying.
pub const DEFAULT_REFERENCE_CONCURSO: u32 = 6_634;

/// 2025-01-02 (civil BRT), the first valid draw day of that year, as days
/// since 1970-01-01.
pub const DEFAULT_REFERENCE_EPOCH_DAY: i64 = 20_090;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;

// -----------------
// Seeds
// -----------------
pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const DRAW_REGISTRY_SEED: &[u8] = b"draw_registry_v1";
pub const DRAW_SEED: &[u8] = b"draw_v1";
pub const ENTRY_SEED: &[u8] = b"entry_v1";
pub const PRIZE_POOL_SEED: &[u8] = b"prize_pool_v1";
