use anchor_lang::prelude::*;

use crate::constants::{MAX_PICKS, MAX_PLATFORM_LEN, MAX_WHATSAPP_LEN, DRAWN_NUMBERS, GAME_ID_LEN};

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub admin: Pubkey,
    pub bump: u8,

    pub paused: bool,

    /// Anchor pair for concurso numbering: the draw on
    /// `reference_epoch_day` carries number `reference_concurso`, and every
    /// other valid draw day is numbered by its signed valid-day distance.
    pub reference_concurso: u32,
    pub reference_epoch_day: i64,

    pub version: u16,
}

#[account]
#[derive(InitSpace)]
pub struct DrawRegistry {
    pub admin: Pubkey,
    pub bump: u8,

    /// Highest concurso ever opened. Guards against regressions; 0 before
    /// the first draw.
    pub last_concurso: u32,

    pub version: u16,
}

#[repr(u8)]
pub enum DrawState {
    Open = 0,
    ResultPublished = 1,
    Finalized = 2,
}

#[account]
#[derive(InitSpace)]
pub struct Draw {
    pub concurso: u32,
    pub bump: u8,
    pub state: u8,

    /// Civil draw date (days since 1970-01-01, BRT frame).
    pub epoch_day: i64,
    /// 20, or 17 on Dec-24 / Dec-31.
    pub draw_hour: u8,
    /// Draw instant, unix seconds.
    pub draw_ts: i64,
    /// Registration cutoff: one second before the draw instant.
    pub cutoff_ts: i64,
    /// 20:00:01 (civil) on the previous day.
    pub reg_start_ts: i64,

    pub result_set: bool,
    pub winning_numbers: [u8; DRAWN_NUMBERS],
    pub result_ts: i64,

    pub finalized: bool,
    pub finalized_ts: i64,

    pub entry_count: u64,
    pub settled_count: u64,
}

#[account]
#[derive(InitSpace)]
pub struct Entry {
    pub concurso: u32,
    pub user: Pubkey,
    pub nonce: u64,
    pub bump: u8,

    #[max_len(MAX_PLATFORM_LEN)]
    pub platform: String,
    #[max_len(GAME_ID_LEN)]
    pub game_id: String,
    #[max_len(MAX_WHATSAPP_LEN)]
    pub whatsapp: String,

    /// 5..=20 distinct numbers in 1..=80, submission order preserved.
    #[max_len(MAX_PICKS)]
    pub numbers: Vec<u8>,

    /// Civil draw date stamped at registration.
    pub epoch_day: i64,

    // Back-office annotations. Written ONLY by annotate_entry; the settle
    // path reads them and never mutates them.
    pub status: u8,
    pub validity: u8,
    pub invalid_reason_code: u16,

    // Settlement outcome.
    pub settled: bool,
    pub validated: bool,
    pub gate: u8,
    pub matches: u8,
    #[max_len(DRAWN_NUMBERS)]
    pub matched_numbers: Vec<u8>,
    pub tier: u8,

    pub created_ts: i64,
    pub settled_ts: i64,
}

/// One per (concurso, platform). Platforms are financially independent:
/// the highest-tier-only rule is applied inside each pool and never across.
#[account]
#[derive(InitSpace)]
pub struct PrizePool {
    pub concurso: u32,
    pub bump: u8,

    #[max_len(MAX_PLATFORM_LEN)]
    pub platform: String,

    /// Best validated match count settled into this pool so far.
    pub top_matches: u8,
    /// How many validated entries sit at `top_matches`. All of them share
    /// the pool when the draw finalizes.
    pub top_count: u32,

    pub settled_count: u64,

    pub version: u16,
}

impl PrizePool {
    /// Winner predicate once the draw is finalized: the pool pays only its
    /// single highest validated level, and a level of zero pays nobody.
    pub fn is_winning_entry(&self, entry: &Entry) -> bool {
        entry.settled
            && entry.validated
            && self.top_matches > 0
            && entry.matches == self.top_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled_entry(matches: u8) -> Entry {
        Entry {
            concurso: 6_634,
            user: Pubkey::new_unique(),
            nonce: 1,
            bump: 255,
            platform: "POPN1".to_string(),
            game_id: "1234567890".to_string(),
            whatsapp: String::new(),
            numbers: vec![10, 20, 33, 47, 80],
            epoch_day: 20_090,
            status: 2,
            validity: 0,
            invalid_reason_code: 0,
            settled: true,
            validated: true,
            gate: 0,
            matches,
            matched_numbers: Vec::new(),
            tier: 0,
            created_ts: 0,
            settled_ts: 0,
        }
    }

    fn pool(top_matches: u8) -> PrizePool {
        PrizePool {
            concurso: 6_634,
            bump: 255,
            platform: "POPN1".to_string(),
            top_matches,
            top_count: 1,
            settled_count: 1,
            version: 1,
        }
    }

    #[test]
    fn only_the_top_level_wins() {
        assert!(pool(4).is_winning_entry(&settled_entry(4)));
        assert!(!pool(4).is_winning_entry(&settled_entry(3)));
        // a pool whose best validated level is zero pays nobody
        assert!(!pool(0).is_winning_entry(&settled_entry(0)));
    }

    #[test]
    fn unsettled_or_gated_entries_never_win() {
        let mut e = settled_entry(4);
        e.settled = false;
        assert!(!pool(4).is_winning_entry(&e));

        let mut e = settled_entry(4);
        e.validated = false;
        e.gate = 1;
        assert!(!pool(4).is_winning_entry(&e));
    }
}
