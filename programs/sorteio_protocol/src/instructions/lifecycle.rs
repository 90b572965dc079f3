use anchor_lang::prelude::*;

use crate::constants::ANNULLED_DRAW_GRACE_SECS;
use crate::errors::SorteioError;
use crate::state::Draw;
use crate::{CloseDraw, CloseEntry, ClosePrizePool};

/// A draw's accounts may be reclaimed once it is finalized, or once it was
/// annulled: no result ever published and the cutoff long past.
fn draw_is_done(draw: &Draw, now: i64) -> bool {
    draw.finalized
        || (!draw.result_set && now > draw.cutoff_ts.saturating_add(ANNULLED_DRAW_GRACE_SECS))
}

/// Users reclaim their own entry rent. Entries must go before the draw
/// itself is closed.
pub fn close_entry(ctx: Context<CloseEntry>, concurso: u32, _nonce: u64) -> Result<()> {
    let draw = &ctx.accounts.draw;
    require!(draw.concurso == concurso, SorteioError::DrawPdaMismatch);

    let entry = &ctx.accounts.entry;
    require!(entry.concurso == concurso, SorteioError::EntryDrawMismatch);

    let now = Clock::get()?.unix_timestamp;
    require!(draw_is_done(draw, now), SorteioError::NotFinalized);

    // lamports move via the `close = user` constraint
    Ok(())
}

pub fn close_prize_pool(
    ctx: Context<ClosePrizePool>,
    concurso: u32,
    _platform: String,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    let draw = &ctx.accounts.draw;
    require!(draw.concurso == concurso, SorteioError::DrawPdaMismatch);

    let now = Clock::get()?.unix_timestamp;
    require!(draw_is_done(draw, now), SorteioError::NotFinalized);

    Ok(())
}

pub fn close_draw(ctx: Context<CloseDraw>, concurso: u32) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    let draw = &ctx.accounts.draw;
    require!(draw.concurso == concurso, SorteioError::DrawPdaMismatch);

    let now = Clock::get()?.unix_timestamp;
    require!(draw_is_done(draw, now), SorteioError::NotFinalized);

    Ok(())
}
