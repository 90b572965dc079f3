use anchor_lang::prelude::*;

use crate::calendar;
use crate::errors::SorteioError;
use crate::state::DrawState;
use crate::winners;
use crate::{OpenDraw, PublishResult, DRAWN_NUMBERS};

/// Opens the draw the resolver currently targets. The caller passes the
/// concurso it expects (it seeds the PDA); the handler re-derives both the
/// schedule and the number from the clock and the reference pair, so a draw
/// can never be opened for a date or number the calendar does not produce.
pub fn open_draw(ctx: Context<OpenDraw>, concurso: u32) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, SorteioError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    let now = Clock::get()?.unix_timestamp;
    let sched = calendar::current_schedule(now)?;
    let expected = calendar::concurso_for_day(
        cfg.reference_concurso,
        cfg.reference_epoch_day,
        sched.epoch_day,
    )?;
    require!(concurso == expected, SorteioError::DrawMismatch);

    let registry = &mut ctx.accounts.draw_registry;
    require!(
        concurso > registry.last_concurso,
        SorteioError::ConcursoRegression
    );
    registry.last_concurso = concurso;

    let draw = &mut ctx.accounts.draw;
    draw.concurso = concurso;
    draw.bump = ctx.bumps.draw;
    draw.state = DrawState::Open as u8;

    draw.epoch_day = sched.epoch_day;
    draw.draw_hour = sched.draw_hour;
    draw.draw_ts = sched.draw_ts;
    draw.cutoff_ts = sched.cutoff_ts;
    draw.reg_start_ts = sched.reg_start_ts;

    draw.result_set = false;
    draw.winning_numbers = [0; DRAWN_NUMBERS];
    draw.result_ts = 0;

    draw.finalized = false;
    draw.finalized_ts = 0;

    draw.entry_count = 0;
    draw.settled_count = 0;

    Ok(())
}

/// Publishes the drawn numbers for a concurso. Set once, only after the
/// registration cutoff has passed.
pub fn publish_result(
    ctx: Context<PublishResult>,
    concurso: u32,
    winning_numbers: [u8; DRAWN_NUMBERS],
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, SorteioError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    let draw = &mut ctx.accounts.draw;
    require!(draw.concurso == concurso, SorteioError::DrawPdaMismatch);
    require!(!draw.result_set, SorteioError::ResultAlreadySet);
    require!(!draw.finalized, SorteioError::AlreadyFinalized);

    winners::validate_winning_numbers(&winning_numbers)?;

    let now = Clock::get()?.unix_timestamp;
    require!(now > draw.cutoff_ts, SorteioError::ResultTooEarly);

    draw.winning_numbers = winning_numbers;
    draw.result_set = true;
    draw.result_ts = now;
    draw.state = DrawState::ResultPublished as u8;

    msg!("result published for concurso {}", concurso);

    Ok(())
}
