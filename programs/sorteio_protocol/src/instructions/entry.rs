use anchor_lang::prelude::*;

use crate::calendar;
use crate::constants::INITIAL_VERSION;
use crate::errors::SorteioError;
use crate::winners::{self, EntryStatus, RechargeValidity};
use crate::{AnnotateEntry, RegisterEntry};

pub fn register_entry(
    ctx: Context<RegisterEntry>,
    concurso: u32,
    platform: String,
    game_id: String,
    whatsapp: String,
    numbers: Vec<u8>,
    nonce: u64,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, SorteioError::Paused);

    winners::validate_platform(&platform)?;
    winners::validate_game_id(&game_id)?;
    winners::validate_whatsapp(&whatsapp)?;
    winners::validate_chosen_numbers(&numbers)?;

    let draw = &mut ctx.accounts.draw;
    require!(draw.concurso == concurso, SorteioError::DrawPdaMismatch);
    require!(!draw.result_set, SorteioError::RegistrationClosed);
    require!(!draw.finalized, SorteioError::RegistrationClosed);

    // the draw must still be the resolver's current target; past its own
    // cutoff the window belongs to the next concurso, not to midnight
    let now = Clock::get()?.unix_timestamp;
    let sched = calendar::current_schedule(now)?;
    require!(sched.epoch_day == draw.epoch_day, SorteioError::DrawMismatch);
    require!(now >= draw.reg_start_ts, SorteioError::RegistrationNotOpen);
    require!(now <= draw.cutoff_ts, SorteioError::RegistrationClosed);

    let pool = &mut ctx.accounts.prize_pool;
    if pool.platform.is_empty() {
        // first entry of this platform for this draw
        pool.concurso = concurso;
        pool.bump = ctx.bumps.prize_pool;
        pool.platform = platform.clone();
        pool.top_matches = 0;
        pool.top_count = 0;
        pool.settled_count = 0;
        pool.version = INITIAL_VERSION;
    }

    let entry = &mut ctx.accounts.entry;
    entry.concurso = concurso;
    entry.user = ctx.accounts.user.key();
    entry.nonce = nonce;
    entry.bump = ctx.bumps.entry;

    entry.platform = platform;
    entry.game_id = game_id;
    entry.whatsapp = whatsapp;
    entry.numbers = numbers;
    entry.epoch_day = draw.epoch_day;

    entry.status = EntryStatus::Pending as u8;
    entry.validity = RechargeValidity::Unchecked as u8;
    entry.invalid_reason_code = 0;

    entry.settled = false;
    entry.validated = false;
    entry.gate = 0;
    entry.matches = 0;
    entry.matched_numbers = Vec::new();
    entry.tier = 0;

    entry.created_ts = now;
    entry.settled_ts = 0;

    draw.entry_count = draw
        .entry_count
        .checked_add(1)
        .ok_or_else(|| error!(SorteioError::MathOverflow))?;

    Ok(())
}

/// Back-office bridge: writes the status/validity taxonomy onto an entry
/// after the recharge cross-reference runs off-chain. This is the only
/// writer of those fields; settlement reads them and never mutates them.
pub fn annotate_entry(
    ctx: Context<AnnotateEntry>,
    status: u8,
    validity: u8,
    invalid_reason_code: u16,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, SorteioError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    EntryStatus::from_u8(status).ok_or(SorteioError::InvalidStatusCode)?;
    RechargeValidity::from_u8(validity).ok_or(SorteioError::InvalidValidityCode)?;

    let entry = &mut ctx.accounts.entry;
    require!(!entry.settled, SorteioError::AlreadySettled);

    entry.status = status;
    entry.validity = validity;
    entry.invalid_reason_code = invalid_reason_code;

    Ok(())
}
