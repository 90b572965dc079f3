// programs/sorteio_protocol/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::{Config, Draw, DrawRegistry, Entry, PrizePool};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [crate::CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetPause<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct CloseConfig<'info> {
    #[account(
        mut,
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
        close = admin,
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct InitializeDrawRegistry<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = admin,
        space = 8 + DrawRegistry::INIT_SPACE,
        seeds = [crate::DRAW_REGISTRY_SEED, config.key().as_ref()],
        bump
    )]
    pub draw_registry: Account<'info, DrawRegistry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(concurso: u32)]
pub struct OpenDraw<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DRAW_REGISTRY_SEED, config.key().as_ref()],
        bump = draw_registry.bump,
    )]
    pub draw_registry: Account<'info, DrawRegistry>,

    #[account(
        init,
        payer = admin,
        space = 8 + Draw::INIT_SPACE,
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump
    )]
    pub draw: Account<'info, Draw>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(
    concurso: u32,
    platform: String,
    game_id: String,
    whatsapp: String,
    numbers: Vec<u8>,
    nonce: u64
)]
pub struct RegisterEntry<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    #[account(
        init,
        payer = user,
        space = 8 + Entry::INIT_SPACE,
        seeds = [
            crate::ENTRY_SEED,
            concurso.to_le_bytes().as_ref(),
            user.key().as_ref(),
            nonce.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub entry: Account<'info, Entry>,

    // one pool per (draw, platform); first registration creates it
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + PrizePool::INIT_SPACE,
        seeds = [
            crate::PRIZE_POOL_SEED,
            concurso.to_le_bytes().as_ref(),
            platform.as_bytes(),
        ],
        bump
    )]
    pub prize_pool: Account<'info, PrizePool>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AnnotateEntry<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub entry: Account<'info, Entry>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(concurso: u32)]
pub struct PublishResult<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    pub admin: Signer<'info>,
}

#[cfg(feature = "mock-result")]
#[derive(Accounts)]
#[instruction(concurso: u32)]
pub struct SetResultMock<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(concurso: u32)]
pub struct SettleEntry<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    #[account(mut)]
    pub entry: Account<'info, Entry>,

    #[account(
        mut,
        seeds = [
            crate::PRIZE_POOL_SEED,
            concurso.to_le_bytes().as_ref(),
            entry.platform.as_bytes(),
        ],
        bump = prize_pool.bump,
    )]
    pub prize_pool: Account<'info, PrizePool>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(concurso: u32, platform: String)]
pub struct SettleBatch<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    #[account(
        mut,
        seeds = [
            crate::PRIZE_POOL_SEED,
            concurso.to_le_bytes().as_ref(),
            platform.as_bytes(),
        ],
        bump = prize_pool.bump,
    )]
    pub prize_pool: Account<'info, PrizePool>,

    pub admin: Signer<'info>,
    // remaining_accounts: Entry PDAs of this draw+platform, max MAX_BATCH
}

#[derive(Accounts)]
#[instruction(concurso: u32)]
pub struct FinalizeDraw<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(concurso: u32, nonce: u64)]
pub struct CloseEntry<'info> {
    #[account(
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    #[account(
        mut,
        seeds = [
            crate::ENTRY_SEED,
            concurso.to_le_bytes().as_ref(),
            user.key().as_ref(),
            nonce.to_le_bytes().as_ref(),
        ],
        bump = entry.bump,
        close = user,
    )]
    pub entry: Account<'info, Entry>,

    #[account(mut)]
    pub user: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(concurso: u32, platform: String)]
pub struct ClosePrizePool<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    #[account(
        mut,
        seeds = [
            crate::PRIZE_POOL_SEED,
            concurso.to_le_bytes().as_ref(),
            platform.as_bytes(),
        ],
        bump = prize_pool.bump,
        close = admin,
    )]
    pub prize_pool: Account<'info, PrizePool>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(concurso: u32)]
pub struct CloseDraw<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [crate::DRAW_SEED, concurso.to_le_bytes().as_ref()],
        bump = draw.bump,
        close = admin,
    )]
    pub draw: Account<'info, Draw>,

    #[account(mut)]
    pub admin: Signer<'info>,
}
