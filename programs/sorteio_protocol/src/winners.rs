use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;
use std::collections::BTreeMap;

use crate::constants::*;
use crate::errors::SorteioError;

// -----------------
// Status vocabulary
// -----------------

/// Back-office entry status. The wire vocabulary (CSV exports) is mixed
/// Portuguese/English; [`EntryStatus::parse`] normalizes it. Only `Valid`
/// and `Validated` may ever reach winner consideration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EntryStatus {
    Pending = 0,
    Valid = 1,
    Validated = 2,
    Invalid = 3,
    Unknown = 4,
}

impl EntryStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "VALID" => EntryStatus::Valid,
            "VALIDATED" | "VALIDADO" => EntryStatus::Validated,
            "INVALID" | "INVÁLIDO" => EntryStatus::Invalid,
            "PENDING" | "PENDENTE" => EntryStatus::Pending,
            _ => EntryStatus::Unknown,
        }
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(EntryStatus::Pending),
            1 => Some(EntryStatus::Valid),
            2 => Some(EntryStatus::Validated),
            3 => Some(EntryStatus::Invalid),
            4 => Some(EntryStatus::Unknown),
            _ => None,
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, EntryStatus::Valid | EntryStatus::Validated)
    }
}

/// Outcome of the upstream recharge-eligibility check. When checked, it is
/// authoritative and short-circuits the manual status path, so a hand-set
/// VALID status can never bypass recharge screening.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RechargeValidity {
    Unchecked = 0,
    Valid = 1,
    Invalid = 2,
    Unknown = 3,
}

impl RechargeValidity {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => RechargeValidity::Unchecked,
            Some(s) => match s.trim().to_uppercase().as_str() {
                "VALID" => RechargeValidity::Valid,
                "INVALID" => RechargeValidity::Invalid,
                _ => RechargeValidity::Unknown,
            },
        }
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(RechargeValidity::Unchecked),
            1 => Some(RechargeValidity::Valid),
            2 => Some(RechargeValidity::Invalid),
            3 => Some(RechargeValidity::Unknown),
            _ => None,
        }
    }
}

/// Why an entry was turned away before matching. 0 is reserved on-chain for
/// "no gate" so the discriminants start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum GateCode {
    RechargeInvalid = 1,
    ValidityUnknown = 2,
    StatusInvalid = 3,
    StatusNotValidated = 4,
}

impl GateCode {
    pub fn label(self) -> &'static str {
        match self {
            GateCode::RechargeInvalid => "RECHARGE_INVALID",
            GateCode::ValidityUnknown => "VALIDITY_UNKNOWN",
            GateCode::StatusInvalid => "STATUS_INVALID",
            GateCode::StatusNotValidated => "STATUS_NOT_VALIDATED",
        }
    }
}

// -----------------
// Prize tiers
// -----------------

/// Total mapping from match count. Priority is display ordering only and
/// never feeds eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PrizeTier {
    Quina = 1,
    Quadra = 2,
    Terno = 3,
    Duque = 4,
    SemPremio = 5,
}

impl PrizeTier {
    pub fn from_matches(matches: u8) -> Self {
        match matches {
            5 => PrizeTier::Quina,
            4 => PrizeTier::Quadra,
            3 => PrizeTier::Terno,
            2 => PrizeTier::Duque,
            _ => PrizeTier::SemPremio,
        }
    }

    pub fn priority(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            PrizeTier::Quina => "Quina",
            PrizeTier::Quadra => "Quadra",
            PrizeTier::Terno => "Terno",
            PrizeTier::Duque => "Duque",
            PrizeTier::SemPremio => "Sem prêmio",
        }
    }
}

// -----------------
// Payload validation
// -----------------

pub fn validate_platform(platform: &str) -> Result<()> {
    require!(
        !platform.is_empty() && platform.len() <= MAX_PLATFORM_LEN,
        SorteioError::InvalidPlatform
    );
    Ok(())
}

pub fn validate_game_id(game_id: &str) -> Result<()> {
    require!(
        game_id.len() == GAME_ID_LEN && game_id.bytes().all(|b| b.is_ascii_digit()),
        SorteioError::InvalidGameId
    );
    Ok(())
}

/// Contact is optional; when present it is digits only.
pub fn validate_whatsapp(whatsapp: &str) -> Result<()> {
    require!(
        whatsapp.len() <= MAX_WHATSAPP_LEN && whatsapp.bytes().all(|b| b.is_ascii_digit()),
        SorteioError::InvalidWhatsapp
    );
    Ok(())
}

pub fn validate_chosen_numbers(numbers: &[u8]) -> Result<()> {
    require!(
        (MIN_PICKS..=MAX_PICKS).contains(&numbers.len()),
        SorteioError::InvalidNumberCount
    );
    for (i, n) in numbers.iter().enumerate() {
        require!(
            (NUMBER_MIN..=NUMBER_MAX).contains(n),
            SorteioError::NumberOutOfRange
        );
        require!(!numbers[..i].contains(n), SorteioError::DuplicateNumber);
    }
    Ok(())
}

pub fn validate_winning_numbers(numbers: &[u8; DRAWN_NUMBERS]) -> Result<()> {
    for (i, n) in numbers.iter().enumerate() {
        require!(
            (NUMBER_MIN..=NUMBER_MAX).contains(n),
            SorteioError::NumberOutOfRange
        );
        require!(!numbers[..i].contains(n), SorteioError::DuplicateNumber);
    }
    Ok(())
}

// -----------------
// Matcher
// -----------------

/// Count and subset of `chosen` present in `winning`; submission order is
/// preserved, membership only.
pub fn match_numbers(chosen: &[u8], winning: &[u8; DRAWN_NUMBERS]) -> (u8, Vec<u8>) {
    let matched: Vec<u8> = chosen
        .iter()
        .copied()
        .filter(|n| winning.contains(n))
        .collect();
    (matched.len() as u8, matched)
}

// -----------------
// Plain-data views
// -----------------

/// An entry as plain data, decoupled from account storage so the gate and
/// the aggregator stay pure. Handlers build these from accounts; admin
/// tooling builds them from exported rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryView {
    pub platform: String,
    pub game_id: String,
    pub whatsapp: String,
    pub concurso: u32,
    pub epoch_day: i64,
    pub numbers: Vec<u8>,
    pub status: EntryStatus,
    pub validity: RechargeValidity,
    pub invalid_reason_code: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningResult {
    pub concurso: u32,
    pub epoch_day: i64,
    pub winning_numbers: [u8; DRAWN_NUMBERS],
}

/// Published results keyed by (concurso, draw date). One per draw, set once.
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    by_draw: BTreeMap<(u32, i64), [u8; DRAWN_NUMBERS]>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, concurso: u32, epoch_day: i64, winning_numbers: [u8; DRAWN_NUMBERS]) {
        self.by_draw.insert((concurso, epoch_day), winning_numbers);
    }

    pub fn from_records(records: &[WinningResult]) -> Self {
        let mut set = Self::new();
        for r in records {
            set.insert(r.concurso, r.epoch_day, r.winning_numbers);
        }
        set
    }

    pub fn lookup(&self, concurso: u32, epoch_day: i64) -> Option<&[u8; DRAWN_NUMBERS]> {
        self.by_draw.get(&(concurso, epoch_day))
    }

    pub fn len(&self) -> usize {
        self.by_draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_draw.is_empty()
    }
}

// -----------------
// Validation gate
// -----------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Turned away before matching, with the gate that fired.
    Rejected {
        gate: GateCode,
        invalid_reason_code: u16,
    },
    /// No winning result published for (concurso, draw date). A normal
    /// outcome, not an error.
    NoResult,
    Validated {
        matches: u8,
        matched_numbers: Vec<u8>,
        tier: PrizeTier,
        winning_numbers: [u8; DRAWN_NUMBERS],
    },
}

impl ValidationOutcome {
    pub fn is_validated(&self) -> bool {
        matches!(self, ValidationOutcome::Validated { .. })
    }
}

/// Gate + matcher, in strict priority order: the recharge check when present
/// is authoritative; only unchecked entries fall back to the manual status;
/// then the result lookup; then the matcher.
pub fn validate_entry(entry: &EntryView, results: &ResultSet) -> ValidationOutcome {
    match entry.validity {
        RechargeValidity::Invalid => {
            return ValidationOutcome::Rejected {
                gate: GateCode::RechargeInvalid,
                invalid_reason_code: entry.invalid_reason_code,
            }
        }
        RechargeValidity::Unknown => {
            return ValidationOutcome::Rejected {
                gate: GateCode::ValidityUnknown,
                invalid_reason_code: 0,
            }
        }
        RechargeValidity::Valid => {}
        RechargeValidity::Unchecked => {
            if entry.status == EntryStatus::Invalid {
                return ValidationOutcome::Rejected {
                    gate: GateCode::StatusInvalid,
                    invalid_reason_code: 0,
                };
            }
            if !entry.status.is_accepted() {
                return ValidationOutcome::Rejected {
                    gate: GateCode::StatusNotValidated,
                    invalid_reason_code: 0,
                };
            }
        }
    }

    let Some(winning) = results.lookup(entry.concurso, entry.epoch_day) else {
        return ValidationOutcome::NoResult;
    };

    let (matches, matched_numbers) = match_numbers(&entry.numbers, winning);
    ValidationOutcome::Validated {
        matches,
        matched_numbers,
        tier: PrizeTier::from_matches(matches),
        winning_numbers: *winning,
    }
}

// -----------------
// Winner aggregation
// -----------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinnerRow {
    pub platform: String,
    pub game_id: String,
    pub whatsapp: String,
    pub concurso: u32,
    pub epoch_day: i64,
    pub matches: u8,
    pub matched_numbers: Vec<u8>,
    pub tier: PrizeTier,
    pub winning_numbers: [u8; DRAWN_NUMBERS],
}

/// Winners across a snapshot of entries.
///
/// Entries outside the accepted status set never reach grouping. Groups are
/// keyed by (platform, concurso, draw date) — platforms hold financially
/// independent pools and are never merged. Each group pays only its highest
/// validated match level; a level of zero pays nobody; ties all share.
/// Output order is deterministic: matches desc, concurso asc, platform asc,
/// game id asc.
pub fn collect_winners(entries: &[EntryView], results: &ResultSet) -> Vec<WinnerRow> {
    let mut groups: BTreeMap<(&str, u32, i64), Vec<WinnerRow>> = BTreeMap::new();

    for entry in entries {
        if !entry.status.is_accepted() {
            continue;
        }
        if let ValidationOutcome::Validated {
            matches,
            matched_numbers,
            tier,
            winning_numbers,
        } = validate_entry(entry, results)
        {
            groups
                .entry((entry.platform.as_str(), entry.concurso, entry.epoch_day))
                .or_default()
                .push(WinnerRow {
                    platform: entry.platform.clone(),
                    game_id: entry.game_id.clone(),
                    whatsapp: entry.whatsapp.clone(),
                    concurso: entry.concurso,
                    epoch_day: entry.epoch_day,
                    matches,
                    matched_numbers,
                    tier,
                    winning_numbers,
                });
        }
    }

    let mut winners = Vec::new();
    for (_, rows) in groups {
        let top = rows.iter().map(|r| r.matches).max().unwrap_or(0);
        if top == 0 {
            continue;
        }
        winners.extend(rows.into_iter().filter(|r| r.matches == top));
    }

    winners.sort_by(|a, b| {
        b.matches
            .cmp(&a.matches)
            .then(a.concurso.cmp(&b.concurso))
            .then(a.platform.cmp(&b.platform))
            .then(a.game_id.cmp(&b.game_id))
    });
    winners
}

// -----------------
// Snapshot fingerprint
// -----------------

/// Cheap content fingerprint over an entry snapshot: length plus the first
/// and last identifying fields. Callers memoize winner computations on it;
/// the core itself never caches.
pub fn entries_fingerprint(entries: &[EntryView]) -> [u8; 32] {
    let len = (entries.len() as u64).to_le_bytes();
    match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => hashv(&[
            &len,
            first.platform.as_bytes(),
            first.game_id.as_bytes(),
            &first.concurso.to_le_bytes(),
            last.platform.as_bytes(),
            last.game_id.as_bytes(),
            &last.concurso.to_le_bytes(),
        ])
        .to_bytes(),
        _ => hashv(&[&len]).to_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 20_090; // 2025-01-02
    const WINNING: [u8; 5] = [10, 20, 33, 47, 80];

    fn entry(platform: &str, game_id: &str, numbers: &[u8]) -> EntryView {
        EntryView {
            platform: platform.to_string(),
            game_id: game_id.to_string(),
            whatsapp: String::new(),
            concurso: 6_634,
            epoch_day: DAY,
            numbers: numbers.to_vec(),
            status: EntryStatus::Validated,
            validity: RechargeValidity::Unchecked,
            invalid_reason_code: 0,
        }
    }

    fn results() -> ResultSet {
        let mut set = ResultSet::new();
        set.insert(6_634, DAY, WINNING);
        set
    }

    #[test]
    fn status_vocabulary() {
        assert_eq!(EntryStatus::parse("VALIDADO"), EntryStatus::Validated);
        assert_eq!(EntryStatus::parse("  validado  "), EntryStatus::Validated);
        assert_eq!(EntryStatus::parse("inválido"), EntryStatus::Invalid);
        assert_eq!(EntryStatus::parse("INVALID"), EntryStatus::Invalid);
        assert_eq!(EntryStatus::parse("pendente"), EntryStatus::Pending);
        assert_eq!(EntryStatus::parse("whatever"), EntryStatus::Unknown);
        assert!(EntryStatus::Valid.is_accepted());
        assert!(EntryStatus::Validated.is_accepted());
        assert!(!EntryStatus::Pending.is_accepted());
        assert!(!EntryStatus::Unknown.is_accepted());

        assert_eq!(RechargeValidity::parse(None), RechargeValidity::Unchecked);
        assert_eq!(
            RechargeValidity::parse(Some("valid")),
            RechargeValidity::Valid
        );
        assert_eq!(
            RechargeValidity::parse(Some("REJECTED")),
            RechargeValidity::Unknown
        );
    }

    #[test]
    fn matcher_counts_and_preserves_order() {
        let (count, matched) = match_numbers(&[10, 20, 30, 40, 50], &[10, 20, 99, 98, 97]);
        assert_eq!(count, 2);
        assert_eq!(matched, vec![10, 20]);

        let (count, matched) = match_numbers(&[80, 10], &WINNING);
        assert_eq!(count, 2);
        assert_eq!(matched, vec![80, 10]); // chosen order, not winning order

        let (count, matched) = match_numbers(&[1, 2, 3, 4, 5], &WINNING);
        assert_eq!(count, 0);
        assert!(matched.is_empty());
    }

    #[test]
    fn tier_mapping_is_total() {
        assert_eq!(PrizeTier::from_matches(5), PrizeTier::Quina);
        assert_eq!(PrizeTier::from_matches(5).priority(), 1);
        assert_eq!(PrizeTier::from_matches(4), PrizeTier::Quadra);
        assert_eq!(PrizeTier::from_matches(3), PrizeTier::Terno);
        assert_eq!(PrizeTier::from_matches(2), PrizeTier::Duque);
        assert_eq!(PrizeTier::from_matches(1), PrizeTier::SemPremio);
        assert_eq!(PrizeTier::from_matches(0).priority(), 5);
    }

    #[test]
    fn gate_recharge_invalid_overrides_valid_status() {
        let mut e = entry("POPN1", "1234567890", &[10, 20, 33, 47, 80]);
        e.status = EntryStatus::Valid;
        e.validity = RechargeValidity::Invalid;
        e.invalid_reason_code = 7;
        match validate_entry(&e, &results()) {
            ValidationOutcome::Rejected {
                gate,
                invalid_reason_code,
            } => {
                assert_eq!(gate, GateCode::RechargeInvalid);
                assert_eq!(invalid_reason_code, 7);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn gate_unknown_validity_rejects() {
        let mut e = entry("POPN1", "1234567890", &[10, 20, 30, 40, 50]);
        e.validity = RechargeValidity::Unknown;
        assert_eq!(
            validate_entry(&e, &results()),
            ValidationOutcome::Rejected {
                gate: GateCode::ValidityUnknown,
                invalid_reason_code: 0
            }
        );
    }

    #[test]
    fn gate_recharge_valid_skips_status_path() {
        // a recharge-valid entry passes even with a pending manual status
        let mut e = entry("POPN1", "1234567890", &[10, 20, 30, 40, 50]);
        e.status = EntryStatus::Pending;
        e.validity = RechargeValidity::Valid;
        assert!(validate_entry(&e, &results()).is_validated());
    }

    #[test]
    fn gate_status_path() {
        let mut e = entry("POPN1", "1234567890", &[10, 20, 30, 40, 50]);
        e.status = EntryStatus::Invalid;
        assert_eq!(
            validate_entry(&e, &results()),
            ValidationOutcome::Rejected {
                gate: GateCode::StatusInvalid,
                invalid_reason_code: 0
            }
        );
        e.status = EntryStatus::Pending;
        assert_eq!(
            validate_entry(&e, &results()),
            ValidationOutcome::Rejected {
                gate: GateCode::StatusNotValidated,
                invalid_reason_code: 0
            }
        );
        e.status = EntryStatus::Unknown;
        assert_eq!(
            validate_entry(&e, &results()),
            ValidationOutcome::Rejected {
                gate: GateCode::StatusNotValidated,
                invalid_reason_code: 0
            }
        );
    }

    #[test]
    fn missing_result_is_a_normal_outcome() {
        let e = entry("POPN1", "1234567890", &[10, 20, 30, 40, 50]);
        assert_eq!(
            validate_entry(&e, &ResultSet::new()),
            ValidationOutcome::NoResult
        );
    }

    #[test]
    fn validated_outcome_carries_everything() {
        let e = entry("POPN1", "1234567890", &[10, 20, 33, 1, 2]);
        match validate_entry(&e, &results()) {
            ValidationOutcome::Validated {
                matches,
                matched_numbers,
                tier,
                winning_numbers,
            } => {
                assert_eq!(matches, 3);
                assert_eq!(matched_numbers, vec![10, 20, 33]);
                assert_eq!(tier, PrizeTier::Terno);
                assert_eq!(winning_numbers, WINNING);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn higher_level_suppresses_lower_in_same_pool() {
        let quadra = entry("POPN1", "1111111111", &[10, 20, 33, 47, 1]);
        let terno = entry("POPN1", "2222222222", &[10, 20, 33, 1, 2]);
        let winners = collect_winners(&[terno, quadra], &results());
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].game_id, "1111111111");
        assert_eq!(winners[0].matches, 4);
        assert_eq!(winners[0].tier, PrizeTier::Quadra);
    }

    #[test]
    fn platforms_win_independently() {
        let a = entry("POPN1", "1111111111", &[10, 20, 33, 1, 2]);
        let b = entry("POPLUZ", "2222222222", &[10, 20, 47, 3, 4]);
        let winners = collect_winners(&[a, b], &results());
        assert_eq!(winners.len(), 2);
        let platforms: Vec<&str> = winners.iter().map(|w| w.platform.as_str()).collect();
        assert!(platforms.contains(&"POPN1"));
        assert!(platforms.contains(&"POPLUZ"));
    }

    #[test]
    fn ties_share_the_pool() {
        let a = entry("POPN1", "1111111111", &[10, 20, 33, 1, 2]);
        let b = entry("POPN1", "2222222222", &[20, 33, 47, 3, 4]);
        let winners = collect_winners(&[a, b], &results());
        assert_eq!(winners.len(), 2);
        assert!(winners.iter().all(|w| w.matches == 3));
    }

    #[test]
    fn pending_never_wins() {
        let mut e = entry("POPN1", "1111111111", &[10, 20, 33, 47, 80]);
        e.status = EntryStatus::Pending;
        assert!(collect_winners(&[e], &results()).is_empty());
    }

    #[test]
    fn zero_match_groups_pay_nobody() {
        let e = entry("POPN1", "1111111111", &[1, 2, 3, 4, 5]);
        assert!(collect_winners(&[e], &results()).is_empty());
    }

    #[test]
    fn single_match_group_still_lists_its_top() {
        // eligibility ignores tier priority: a best-of-one-match group is
        // reported at the no-prize tier
        let e = entry("POPN1", "1111111111", &[10, 1, 2, 3, 4]);
        let winners = collect_winners(&[e], &results());
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].matches, 1);
        assert_eq!(winners[0].tier, PrizeTier::SemPremio);
    }

    #[test]
    fn output_order_is_deterministic() {
        let set = ResultSet::from_records(&[
            WinningResult {
                concurso: 6_634,
                epoch_day: DAY,
                winning_numbers: WINNING,
            },
            WinningResult {
                concurso: 6_635,
                epoch_day: DAY + 1,
                winning_numbers: WINNING,
            },
        ]);
        assert_eq!(set.len(), 2);

        let mut later = entry("POPN1", "3333333333", &[10, 20, 33, 1, 2]);
        later.concurso = 6_635;
        later.epoch_day = DAY + 1;
        let quadra = entry("POPLUZ", "2222222222", &[10, 20, 33, 47, 1]);
        let terno_a = entry("POPN1", "1111111111", &[10, 20, 33, 1, 2]);
        let terno_b = entry("POPN1", "0000000000", &[20, 33, 47, 3, 4]);

        let winners = collect_winners(&[later, terno_a, quadra, terno_b], &set);
        let keys: Vec<(u8, u32, &str, &str)> = winners
            .iter()
            .map(|w| (w.matches, w.concurso, w.platform.as_str(), w.game_id.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (4, 6_634, "POPLUZ", "2222222222"),
                (3, 6_634, "POPN1", "0000000000"),
                (3, 6_634, "POPN1", "1111111111"),
                (3, 6_635, "POPN1", "3333333333"),
            ]
        );
    }

    #[test]
    fn empty_inputs_are_fine() {
        assert!(ResultSet::new().is_empty());
        assert!(collect_winners(&[], &ResultSet::new()).is_empty());
        assert!(collect_winners(&[], &results()).is_empty());
    }

    #[test]
    fn display_labels() {
        assert_eq!(PrizeTier::Quina.label(), "Quina");
        assert_eq!(PrizeTier::SemPremio.label(), "Sem prêmio");
        assert_eq!(GateCode::RechargeInvalid.label(), "RECHARGE_INVALID");
        assert_eq!(GateCode::StatusNotValidated.label(), "STATUS_NOT_VALIDATED");
    }

    #[test]
    fn payload_validators() {
        assert!(validate_platform("POPN1").is_ok());
        assert!(validate_platform("").is_err());
        assert!(validate_platform("WAY-TOO-LONG-PLATFORM").is_err());

        assert!(validate_game_id("0123456789").is_ok());
        assert!(validate_game_id("123456789").is_err());
        assert!(validate_game_id("12345678901").is_err());
        assert!(validate_game_id("12345678x0").is_err());

        assert!(validate_whatsapp("").is_ok());
        assert!(validate_whatsapp("5511999998888").is_ok());
        assert!(validate_whatsapp("+5511999998888").is_err());

        assert!(validate_chosen_numbers(&[1, 2, 3, 4, 5]).is_ok());
        assert!(validate_chosen_numbers(&(1..=20).collect::<Vec<u8>>()).is_ok());
        assert!(validate_chosen_numbers(&[1, 2, 3, 4]).is_err());
        assert!(validate_chosen_numbers(&(1..=21).collect::<Vec<u8>>()).is_err());
        assert!(validate_chosen_numbers(&[1, 2, 3, 4, 81]).is_err());
        assert!(validate_chosen_numbers(&[0, 2, 3, 4, 5]).is_err());
        assert!(validate_chosen_numbers(&[7, 2, 3, 4, 7]).is_err());

        assert!(validate_winning_numbers(&[1, 2, 3, 4, 80]).is_ok());
        assert!(validate_winning_numbers(&[1, 2, 3, 4, 4]).is_err());
        assert!(validate_winning_numbers(&[1, 2, 3, 4, 0]).is_err());
    }

    #[test]
    fn fingerprint_tracks_identity_fields() {
        let a = entry("POPN1", "1111111111", &[1, 2, 3, 4, 5]);
        let b = entry("POPN1", "2222222222", &[1, 2, 3, 4, 5]);

        let snap = vec![a.clone(), b.clone()];
        assert_eq!(entries_fingerprint(&snap), entries_fingerprint(&snap));
        assert_ne!(entries_fingerprint(&snap), entries_fingerprint(&[a.clone()]));
        assert_ne!(
            entries_fingerprint(&[a.clone(), b.clone()]),
            entries_fingerprint(&[b, a])
        );
        assert_eq!(entries_fingerprint(&[]), entries_fingerprint(&[]));
    }
}
