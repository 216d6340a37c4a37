//! Static reference data: trader levels, the leaderboard, and the demo wallet.
//!
//! These tables are read-only. Nothing in the game mutates them.

/// One trader to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelData {
    pub id: u32,
    pub name: &'static str,
    pub hint: &'static str,
}

/// A fixed leaderboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub score: u64,
}

/// Hardcoded demo wallet. Not real key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wallet {
    pub address: &'static str,
    pub private_key: &'static str,
}

pub static LEVELS: [LevelData; 5] = [
    LevelData {
        id: 1,
        name: "CryptoKing",
        hint: "Known for bullish strategies",
    },
    LevelData {
        id: 2,
        name: "NeoTrader",
        hint: "Specializes in DeFi protocols",
    },
    LevelData {
        id: 3,
        name: "MatrixPro",
        hint: "Expert in algorithmic trading",
    },
    LevelData {
        id: 4,
        name: "CyberNinja",
        hint: "Stealthy trader, rare appearances",
    },
    LevelData {
        id: 5,
        name: "ByteMaster",
        hint: "Controls large byte positions",
    },
];

pub static LEADERBOARD: [LeaderboardEntry; 10] = [
    LeaderboardEntry { rank: 1, name: "CryptoKing", score: 1_250_000 },
    LeaderboardEntry { rank: 2, name: "NeoTrader", score: 980_000 },
    LeaderboardEntry { rank: 3, name: "MatrixPro", score: 750_000 },
    LeaderboardEntry { rank: 4, name: "CyberNinja", score: 600_000 },
    LeaderboardEntry { rank: 5, name: "ByteMaster", score: 450_000 },
    LeaderboardEntry { rank: 6, name: "DataQueen", score: 320_000 },
    LeaderboardEntry { rank: 7, name: "CodeWarrior", score: 280_000 },
    LeaderboardEntry { rank: 8, name: "PixelPunk", score: 240_000 },
    LeaderboardEntry { rank: 9, name: "NeonGhost", score: 200_000 },
    LeaderboardEntry { rank: 10, name: "HackSmith", score: 180_000 },
];

pub const DEMO_WALLET: Wallet = Wallet {
    address: "0xA4c13ef5d988E614Da2d33B514B530DAF0f80D95",
    private_key: "0x7f9e8d6c5b4a3f2e1d0c9b8a7f6e5d4c3b2a1f0e9d8c7b6a5f4e3d2c1b0a9f8e",
};

/// Look up the trader for `level`.
///
/// Only five traders are defined. Any other level id resolves to the first
/// entry, so level 6 and beyond all expect "CryptoKing".
pub fn level_data(level: u32) -> &'static LevelData {
    LEVELS
        .iter()
        .find(|l| l.id == level)
        .unwrap_or(&LEVELS[0])
}
