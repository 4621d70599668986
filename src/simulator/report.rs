//! Simulation report generation.

use crate::catalog::Rarity;
use crate::pull::PullRecord;
use crate::rates::RarityDistribution;
use serde::Serialize;

/// Statistics for one simulated player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    pub total_pulls: u64,
    pub rarity_counts: [u64; 5],
    pub pity_triggers: u64,
    /// Pulls spent to reach each legendary-or-better, including that pull
    pub pulls_per_high_tier: Vec<u32>,
    pub current_drought: u32,
    pub longest_drought: u32,
    pub ten_pull_batches: u64,
    pub batches_meeting_floor: u64,
    pub unique_items_owned: u32,
}

impl PlayerStats {
    pub fn record_batch(&mut self, records: &[PullRecord], floor: Option<Rarity>) {
        for record in records {
            self.total_pulls += 1;
            self.rarity_counts[record.rarity().index()] += 1;
            if record.was_pity_triggered() {
                self.pity_triggers += 1;
            }
            if record.rarity().is_high_tier() {
                self.pulls_per_high_tier.push(self.current_drought + 1);
                self.current_drought = 0;
            } else {
                self.current_drought += 1;
                self.longest_drought = self.longest_drought.max(self.current_drought);
            }
        }

        if let (10, Some(floor)) = (records.len(), floor) {
            self.ten_pull_batches += 1;
            if records.iter().any(|r| r.rarity() >= floor) {
                self.batches_meeting_floor += 1;
            }
        }
    }

    pub fn high_tier_pulls(&self) -> u64 {
        self.rarity_counts[Rarity::Legendary.index()] + self.rarity_counts[Rarity::Mythic.index()]
    }
}

/// Aggregated results from multiple simulated players.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub banner_id: String,
    pub num_players: u32,
    pub total_pulls: u64,

    pub rarity_counts: [u64; 5],
    pub observed_rates: [f64; 5],
    /// Odds of a fresh player's first draw
    pub expected_rates: RarityDistribution,

    pub pity_triggers: u64,
    pub avg_pulls_per_high_tier: f64,
    pub longest_drought: u32,

    pub guaranteed_rarity: Option<Rarity>,
    pub ten_pull_batches: u64,
    pub batches_meeting_floor: u64,

    pub avg_unique_items: f64,
}

impl SimReport {
    pub fn from_players(
        banner_id: &str,
        expected_rates: RarityDistribution,
        guaranteed_rarity: Option<Rarity>,
        players: Vec<PlayerStats>,
    ) -> Self {
        let num_players = players.len() as u32;
        let total_pulls: u64 = players.iter().map(|p| p.total_pulls).sum();

        let mut rarity_counts = [0u64; 5];
        for player in &players {
            for (total, count) in rarity_counts.iter_mut().zip(player.rarity_counts.iter()) {
                *total += count;
            }
        }
        let observed_rates = rarity_counts.map(|c| c as f64 / total_pulls.max(1) as f64);

        let gaps: Vec<u32> = players
            .iter()
            .flat_map(|p| p.pulls_per_high_tier.iter().copied())
            .collect();
        let avg_pulls_per_high_tier = if gaps.is_empty() {
            0.0
        } else {
            gaps.iter().map(|g| *g as f64).sum::<f64>() / gaps.len() as f64
        };

        Self {
            banner_id: banner_id.to_string(),
            num_players,
            total_pulls,
            rarity_counts,
            observed_rates,
            expected_rates,
            pity_triggers: players.iter().map(|p| p.pity_triggers).sum(),
            avg_pulls_per_high_tier,
            longest_drought: players.iter().map(|p| p.longest_drought).max().unwrap_or(0),
            guaranteed_rarity,
            ten_pull_batches: players.iter().map(|p| p.ten_pull_batches).sum(),
            batches_meeting_floor: players.iter().map(|p| p.batches_meeting_floor).sum(),
            avg_unique_items: players.iter().map(|p| p.unique_items_owned as f64).sum::<f64>()
                / num_players.max(1) as f64,
        }
    }

    pub fn floor_hit_rate(&self) -> f64 {
        if self.ten_pull_batches == 0 {
            1.0
        } else {
            self.batches_meeting_floor as f64 / self.ten_pull_batches as f64
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    PULL SIMULATION REPORT\n");
        report.push_str(&format!("                    Banner: {}\n", self.banner_id));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Players: {}, total pulls: {}\n\n",
            self.num_players, self.total_pulls
        ));

        report.push_str("── RARITY ───────────────────────────────────────────────────────\n");
        report.push_str("  Tier        Count      Observed   First-pull odds\n");
        report.push_str("  ────        ─────      ────────   ───────────────\n");
        for rarity in Rarity::ALL {
            let i = rarity.index();
            let pct = self.observed_rates[i] * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:<10} {:>8}   {:>7.2}%   {:>7.2}%  {}\n",
                rarity.name(),
                self.rarity_counts[i],
                pct,
                self.expected_rates.get(rarity) * 100.0,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── PITY ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Forced pity draws:       {}\n",
            self.pity_triggers
        ));
        report.push_str(&format!(
            "  Avg pulls per Legendary+: {:.1}\n",
            self.avg_pulls_per_high_tier
        ));
        report.push_str(&format!(
            "  Longest drought:         {}\n\n",
            self.longest_drought
        ));

        if let Some(floor) = self.guaranteed_rarity {
            report.push_str("── TEN-PULL GUARANTEE ───────────────────────────────────────────\n");
            report.push_str(&format!(
                "  Floor: {}, met in {}/{} batches ({:.1}%)\n\n",
                floor.name(),
                self.batches_meeting_floor,
                self.ten_pull_batches,
                self.floor_hit_rate() * 100.0
            ));
        }

        report.push_str("── COLLECTION ───────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg unique items owned:  {:.1}\n",
            self.avg_unique_items
        ));

        if self.floor_hit_rate() < 1.0 {
            report.push_str("  ⚠️  Some ten-pulls missed the guaranteed rarity\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
