use anchor_lang::prelude::*;

use crate::calendar;
use crate::constants::*;
use crate::errors::SorteioError;
use crate::{CloseConfig, InitializeConfig, InitializeDrawRegistry, SetPause};

#[cfg(feature = "mock-result")]
use crate::SetResultMock;

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    reference_concurso: u32,
    reference_epoch_day: i64,
) -> Result<()> {
    require!(reference_concurso > 0, SorteioError::InvalidReferenceConcurso);
    // the anchor must itself be a draw day, otherwise the numbering walk
    // has no well-defined starting point for operators to reason about
    require!(
        calendar::is_valid_draw_day(reference_epoch_day),
        SorteioError::InvalidReferenceDay
    );

    let cfg = &mut ctx.accounts.config;
    cfg.admin = ctx.accounts.admin.key();
    cfg.bump = ctx.bumps.config;
    cfg.paused = false;
    cfg.reference_concurso = reference_concurso;
    cfg.reference_epoch_day = reference_epoch_day;
    cfg.version = INITIAL_VERSION;

    Ok(())
}

pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    cfg.paused = paused;

    Ok(())
}

pub fn close_config(ctx: Context<CloseConfig>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    // account closed by the `close` constraint
    Ok(())
}

pub fn initialize_draw_registry(ctx: Context<InitializeDrawRegistry>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    let registry = &mut ctx.accounts.draw_registry;
    registry.admin = cfg.admin;
    registry.bump = ctx.bumps.draw_registry;
    registry.last_concurso = 0;
    registry.version = INITIAL_VERSION;

    Ok(())
}

/// Devnet-only: inject a result without the cutoff gate so settlement can
/// be exercised end to end in tests.
#[cfg(feature = "mock-result")]
pub fn set_result_mock(
    ctx: Context<SetResultMock>,
    concurso: u32,
    winning_numbers: [u8; DRAWN_NUMBERS],
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    let draw = &mut ctx.accounts.draw;
    require!(draw.concurso == concurso, SorteioError::DrawPdaMismatch);
    require!(!draw.result_set, SorteioError::ResultAlreadySet);
    require!(!draw.finalized, SorteioError::AlreadyFinalized);

    crate::winners::validate_winning_numbers(&winning_numbers)?;

    draw.winning_numbers = winning_numbers;
    draw.result_set = true;
    draw.result_ts = Clock::get()?.unix_timestamp;
    draw.state = crate::state::DrawState::ResultPublished as u8;

    Ok(())
}
