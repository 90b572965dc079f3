use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH;
use crate::errors::SorteioError;
use crate::state::{Draw, DrawState, Entry, PrizePool};
use crate::winners::{
    self, EntryStatus, EntryView, RechargeValidity, ResultSet, ValidationOutcome,
};
use crate::{FinalizeDraw, SettleBatch, SettleEntry, ENTRY_SEED};

fn entry_view(entry: &Entry) -> Result<EntryView> {
    Ok(EntryView {
        platform: entry.platform.clone(),
        game_id: entry.game_id.clone(),
        whatsapp: entry.whatsapp.clone(),
        concurso: entry.concurso,
        epoch_day: entry.epoch_day,
        numbers: entry.numbers.clone(),
        status: EntryStatus::from_u8(entry.status).ok_or(SorteioError::InvalidStatusCode)?,
        validity: RechargeValidity::from_u8(entry.validity)
            .ok_or(SorteioError::InvalidValidityCode)?,
        invalid_reason_code: entry.invalid_reason_code,
    })
}

fn draw_results(draw: &Draw) -> ResultSet {
    let mut results = ResultSet::new();
    results.insert(draw.concurso, draw.epoch_day, draw.winning_numbers);
    results
}

/// Records a gate+matcher outcome on the entry and folds it into the
/// platform pool's top-level bookkeeping. The pool tracks only the best
/// validated level and how many entries sit on it; everything below the top
/// is out of the prize by construction.
fn apply_outcome(
    entry: &mut Entry,
    pool: &mut PrizePool,
    outcome: ValidationOutcome,
    now: i64,
) -> Result<()> {
    entry.settled = true;
    entry.settled_ts = now;

    match outcome {
        ValidationOutcome::Validated {
            matches,
            matched_numbers,
            tier,
            ..
        } => {
            entry.validated = true;
            entry.gate = 0;
            entry.matches = matches;
            entry.matched_numbers = matched_numbers;
            entry.tier = tier.priority();

            if matches > pool.top_matches {
                pool.top_matches = matches;
                pool.top_count = 1;
            } else if matches == pool.top_matches && matches > 0 {
                pool.top_count = pool
                    .top_count
                    .checked_add(1)
                    .ok_or_else(|| error!(SorteioError::MathOverflow))?;
            }
        }
        ValidationOutcome::Rejected { gate, .. } => {
            entry.validated = false;
            entry.gate = gate as u8;
            entry.matches = 0;
            entry.matched_numbers = Vec::new();
            entry.tier = 0;
        }
        // settlement only runs with a published result, so a lookup miss
        // cannot occur here; recorded defensively as not validated
        ValidationOutcome::NoResult => {
            entry.validated = false;
            entry.gate = 0;
            entry.matches = 0;
            entry.matched_numbers = Vec::new();
            entry.tier = 0;
        }
    }

    pool.settled_count = pool
        .settled_count
        .checked_add(1)
        .ok_or_else(|| error!(SorteioError::MathOverflow))?;

    Ok(())
}

pub fn settle_entry(ctx: Context<SettleEntry>, concurso: u32) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, SorteioError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    let draw = &mut ctx.accounts.draw;
    require!(draw.concurso == concurso, SorteioError::DrawPdaMismatch);
    require!(draw.result_set, SorteioError::ResultNotSet);
    require!(!draw.finalized, SorteioError::AlreadyFinalized);

    let entry = &mut ctx.accounts.entry;
    require!(entry.concurso == concurso, SorteioError::EntryDrawMismatch);
    require!(!entry.settled, SorteioError::AlreadySettled);

    let pool = &mut ctx.accounts.prize_pool;
    require!(pool.concurso == concurso, SorteioError::PoolDrawMismatch);

    let now = Clock::get()?.unix_timestamp;
    let results = draw_results(draw);
    let outcome = winners::validate_entry(&entry_view(entry)?, &results);
    apply_outcome(entry, pool, outcome, now)?;

    draw.settled_count = draw
        .settled_count
        .checked_add(1)
        .ok_or_else(|| error!(SorteioError::MathOverflow))?;

    Ok(())
}

/// Bulk settlement over remaining accounts. One platform pool per call;
/// entries from another platform are rejected rather than silently folded
/// into the wrong pool.
pub fn settle_batch<'info>(
    ctx: Context<'_, '_, 'info, 'info, SettleBatch<'info>>,
    concurso: u32,
    platform: String,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, SorteioError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    require!(
        ctx.remaining_accounts.len() <= MAX_BATCH,
        SorteioError::TooManyEntries
    );

    let draw = &mut ctx.accounts.draw;
    require!(draw.concurso == concurso, SorteioError::DrawPdaMismatch);
    require!(draw.result_set, SorteioError::ResultNotSet);
    require!(!draw.finalized, SorteioError::AlreadyFinalized);

    let pool = &mut ctx.accounts.prize_pool;
    require!(pool.concurso == concurso, SorteioError::PoolDrawMismatch);

    let now = Clock::get()?.unix_timestamp;
    let results = draw_results(draw);
    let concurso_le = concurso.to_le_bytes();

    for entry_ai in ctx.remaining_accounts.iter() {
        require_keys_eq!(*entry_ai.owner, *ctx.program_id, SorteioError::EntryPdaMismatch);

        let mut data = entry_ai
            .try_borrow_mut_data()
            .map_err(|_| error!(SorteioError::AccountBorrowFailed))?;

        let mut slice: &[u8] = &data;
        let mut entry = Entry::try_deserialize(&mut slice)
            .map_err(|_| error!(SorteioError::EntryPdaMismatch))?;

        let nonce_le = entry.nonce.to_le_bytes();
        let (expected_pda, _bump) = Pubkey::find_program_address(
            &[ENTRY_SEED, &concurso_le, entry.user.as_ref(), &nonce_le],
            ctx.program_id,
        );
        require_keys_eq!(expected_pda, *entry_ai.key, SorteioError::EntryPdaMismatch);

        require!(entry.concurso == concurso, SorteioError::EntryDrawMismatch);
        require!(entry.platform == platform, SorteioError::MixedPlatformBatch);
        require!(!entry.settled, SorteioError::AlreadySettled);

        let outcome = winners::validate_entry(&entry_view(&entry)?, &results);
        apply_outcome(&mut entry, pool, outcome, now)?;

        draw.settled_count = draw
            .settled_count
            .checked_add(1)
            .ok_or_else(|| error!(SorteioError::MathOverflow))?;

        let mut w = std::io::Cursor::new(&mut data[..]);
        entry
            .try_serialize(&mut w)
            .map_err(|_| error!(SorteioError::AccountBorrowFailed))?;
    }

    Ok(())
}

/// Freezes a draw once every entry is settled. From here on the pools'
/// top levels are final and [`PrizePool::is_winning_entry`] is stable.
pub fn finalize_draw(ctx: Context<FinalizeDraw>, concurso: u32) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, SorteioError::Paused);
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), SorteioError::Unauthorized);

    let draw = &mut ctx.accounts.draw;
    require!(draw.concurso == concurso, SorteioError::DrawPdaMismatch);
    require!(draw.result_set, SorteioError::ResultNotSet);
    require!(!draw.finalized, SorteioError::AlreadyFinalized);
    require!(
        draw.settled_count == draw.entry_count,
        SorteioError::EntriesNotSettled
    );

    let now = Clock::get()?.unix_timestamp;
    draw.finalized = true;
    draw.finalized_ts = now;
    draw.state = DrawState::Finalized as u8;

    msg!("concurso {} finalized", concurso);

    Ok(())
}
