use anchor_lang::prelude::*;

pub mod calendar;
pub mod constants;
pub mod contexts;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod winners;

pub use calendar::*;
pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;
pub use winners::*;

use solana_security_txt::security_txt;

security_txt! {
    // Required fields
    name: "Sorteio Protocol",
    project_url: "https://sorteio.poploterias.com",
    contacts: "email:suporte@poploterias.com,link:https://github.com/poploterias/sorteio-protocol/issues",
    policy: "https://github.com/poploterias/sorteio-protocol/blob/main/SECURITY.md",

    // Optional fields
    preferred_languages: "pt,en",
    source_code: "https://github.com/poploterias/sorteio-protocol"
}

declare_id!("3yMYNzVWyDMFbQfyBkeJZbze7WNBSa1VPhin3xbNwrNZ");

#[program]
pub mod sorteio_protocol {
    use super::*;
    use crate::instructions::{admin, draw, entry, lifecycle, settle};

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        reference_concurso: u32,
        reference_epoch_day: i64,
    ) -> Result<()> {
        admin::initialize_config(ctx, reference_concurso, reference_epoch_day)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        admin::set_pause(ctx, paused)
    }

    pub fn close_config(ctx: Context<CloseConfig>) -> Result<()> {
        admin::close_config(ctx)
    }

    pub fn initialize_draw_registry(ctx: Context<InitializeDrawRegistry>) -> Result<()> {
        admin::initialize_draw_registry(ctx)
    }

    // ----------------------------
    // Draw lifecycle
    // ----------------------------
    pub fn open_draw(ctx: Context<OpenDraw>, concurso: u32) -> Result<()> {
        draw::open_draw(ctx, concurso)
    }

    pub fn publish_result(
        ctx: Context<PublishResult>,
        concurso: u32,
        winning_numbers: [u8; DRAWN_NUMBERS],
    ) -> Result<()> {
        draw::publish_result(ctx, concurso, winning_numbers)
    }

    #[cfg(feature = "mock-result")]
    pub fn set_result_mock(
        ctx: Context<SetResultMock>,
        concurso: u32,
        winning_numbers: [u8; DRAWN_NUMBERS],
    ) -> Result<()> {
        admin::set_result_mock(ctx, concurso, winning_numbers)
    }

    // core
    pub fn register_entry(
        ctx: Context<RegisterEntry>,
        concurso: u32,
        platform: String,
        game_id: String,
        whatsapp: String,
        numbers: Vec<u8>,
        nonce: u64,
    ) -> Result<()> {
        entry::register_entry(ctx, concurso, platform, game_id, whatsapp, numbers, nonce)
    }

    pub fn annotate_entry(
        ctx: Context<AnnotateEntry>,
        status: u8,
        validity: u8,
        invalid_reason_code: u16,
    ) -> Result<()> {
        entry::annotate_entry(ctx, status, validity, invalid_reason_code)
    }

    pub fn settle_entry(ctx: Context<SettleEntry>, concurso: u32) -> Result<()> {
        settle::settle_entry(ctx, concurso)
    }

    pub fn settle_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, SettleBatch<'info>>,
        concurso: u32,
        platform: String,
    ) -> Result<()> {
        settle::settle_batch(ctx, concurso, platform)
    }

    pub fn finalize_draw(ctx: Context<FinalizeDraw>, concurso: u32) -> Result<()> {
        settle::finalize_draw(ctx, concurso)
    }

    // rent recovery
    pub fn close_entry(ctx: Context<CloseEntry>, concurso: u32, nonce: u64) -> Result<()> {
        lifecycle::close_entry(ctx, concurso, nonce)
    }

    pub fn close_prize_pool(
        ctx: Context<ClosePrizePool>,
        concurso: u32,
        platform: String,
    ) -> Result<()> {
        lifecycle::close_prize_pool(ctx, concurso, platform)
    }

    pub fn close_draw(ctx: Context<CloseDraw>, concurso: u32) -> Result<()> {
        lifecycle::close_draw(ctx, concurso)
    }
}
