//! Deterministic synthetic fallback data.
//!
//! When no usable store exists (or the real path fails), the pipeline serves
//! a synthetic table instead of an error. The generator is fully
//! deterministic: the same `(seed, n)` always yields the same table, and
//! nothing here touches a platform RNG.
//!
//! Activity levels are drawn around plausibility targets (admissions scale
//! with the elderly share, procedures with PIB) purely so the synthetic data
//! looks reasonable on a chart. The noise is not a statistical model and the
//! resulting correlations carry no meaning.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use saude_core::{derive_indicators, MunicipalityRow, MunicipalityTable, Region};

/// Generate `n` synthetic municipality rows from `seed`.
///
/// Codes run from 100000 upward; populations fall in [10000, 800000], the
/// 60+ population in [1000, 150000] (clamped below the total), PIB per
/// capita in [8000, 45000]. The three per-capita indicators are computed
/// through the same derivation as the real path, so every invariant that
/// holds for reconciled rows holds here too.
pub fn synthesize(seed: u64, n: usize) -> MunicipalityTable {
    let mut rng = SynthRng::new(seed);
    let mut rows = Vec::with_capacity(n);

    for i in 0..n {
        let codigo_ibge = 100_000 + i as i64;
        let populacao_total = rng.uniform_i64(10_000, 800_000);
        let populacao_60_mais = rng.uniform_i64(1_000, 150_000).min(populacao_total - 1);
        let pib_per_capita = rng.uniform_f64(8_000.0, 45_000.0);
        let regiao = Region::ALL[rng.next_below(5) as usize];

        // Positive population is guaranteed by the draw range above.
        let base = derive_indicators(codigo_ibge, populacao_total, populacao_60_mais, None, None, None)
            .expect("synthetic population is always positive");

        // Rate targets per 1000 inhabitants, then materialized as integer
        // counts so the indicators can be recomputed exactly.
        let alvo_internacoes = (base.percentual_idosos * 2.0 + rng.normal(0.0, 10.0)).max(0.0);
        let total_internacoes = (alvo_internacoes * populacao_total as f64 / 1000.0).round() as i64;
        let valor_medio_internacao = rng.uniform_f64(1_000.0, 4_000.0);

        let alvo_procedimentos = (pib_per_capita / 200.0 + rng.normal(0.0, 20.0)).max(0.0);
        let total_procedimentos =
            (alvo_procedimentos * populacao_total as f64 / 1000.0).round() as i64;
        let valor_medio_procedimento = rng.uniform_f64(50.0, 500.0);

        let derived = derive_indicators(
            codigo_ibge,
            populacao_total,
            populacao_60_mais,
            Some(total_internacoes),
            Some(valor_medio_internacao),
            Some(total_procedimentos),
        )
        .expect("synthetic population is always positive");

        rows.push(MunicipalityRow {
            codigo_ibge,
            municipio: Some(format!("Município {}", i + 1)),
            regiao: Some(regiao),
            populacao_total,
            populacao_60_mais,
            percentual_idosos: derived.percentual_idosos,
            pib_per_capita: Some(pib_per_capita),
            total_internacoes: Some(total_internacoes),
            valor_medio_internacao: Some(valor_medio_internacao),
            total_procedimentos: Some(total_procedimentos),
            valor_medio_procedimento: Some(valor_medio_procedimento),
            internacoes_por_1000: derived.internacoes_por_1000,
            procedimentos_por_1000: derived.procedimentos_por_1000,
            gasto_internacao_per_capita: derived.gasto_internacao_per_capita,
        });
    }

    MunicipalityTable::new(rows)
}

/// Seeded generator wrapping a PCG stream. Draw order is part of the
/// determinism contract: reordering the draws in [`synthesize`] changes
/// every table ever produced from a given seed.
struct SynthRng {
    inner: Pcg64Mcg,
}

impl SynthRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Uniform float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform draw in [0, n).
    fn next_below(&mut self, n: u64) -> u64 {
        self.inner.next_u64() % n
    }

    /// Uniform integer in [lo, hi], inclusive.
    fn uniform_i64(&mut self, lo: i64, hi: i64) -> i64 {
        lo + self.next_below((hi - lo + 1) as u64) as i64
    }

    /// Uniform float in [lo, hi).
    fn uniform_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Gaussian via Box-Muller.
    fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        mean + sd * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;
