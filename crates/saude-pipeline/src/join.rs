//! Left join of the four source relations on `codigo_ibge`.

use crate::error::{PipelineError, PipelineResult};
use saude_core::{
    derive_indicators, EconomicRecord, HospitalizationAggregate, MunicipalityRow,
    MunicipalityTable, PopulationRecord, ProcedureAggregate,
};
use std::collections::HashMap;

/// Join population ⟕ economic ⟕ hospitalization ⟕ procedure, preserving
/// every population row in fetch order. A municipality with no match in a
/// relation carries `None` for that relation's fields, and `None` propagates
/// into the derived indicators.
///
/// Each non-population relation may contribute at most one row per
/// `codigo_ibge` (the aggregates are grouped upstream); a duplicate key is a
/// data shape violation, since joining it would silently multiply rows.
pub fn join_sources(
    population: Vec<PopulationRecord>,
    economic: Vec<EconomicRecord>,
    hospitalization: Vec<HospitalizationAggregate>,
    procedures: Vec<ProcedureAggregate>,
) -> PipelineResult<MunicipalityTable> {
    let economic = index_unique("pib_municipios", economic, |r| r.codigo_ibge)?;
    let hospitalization = index_unique("sus_aih", hospitalization, |r| r.codigo_ibge)?;
    let procedures = index_unique("sus_procedimento_ambulatorial", procedures, |r| {
        r.codigo_ibge
    })?;

    let mut rows = Vec::with_capacity(population.len());
    for pop in population {
        let econ = economic.get(&pop.codigo_ibge);
        let hosp = hospitalization.get(&pop.codigo_ibge);
        let proc = procedures.get(&pop.codigo_ibge);

        let derived = derive_indicators(
            pop.codigo_ibge,
            pop.populacao_total,
            pop.populacao_60_mais,
            hosp.map(|h| h.total_internacoes),
            hosp.map(|h| h.valor_medio_internacao),
            proc.map(|p| p.total_procedimentos),
        )?;

        rows.push(MunicipalityRow {
            codigo_ibge: pop.codigo_ibge,
            municipio: None,
            regiao: None,
            populacao_total: pop.populacao_total,
            populacao_60_mais: pop.populacao_60_mais,
            percentual_idosos: derived.percentual_idosos,
            pib_per_capita: econ.map(|e| e.pib_per_capita),
            total_internacoes: hosp.map(|h| h.total_internacoes),
            valor_medio_internacao: hosp.map(|h| h.valor_medio_internacao),
            total_procedimentos: proc.map(|p| p.total_procedimentos),
            valor_medio_procedimento: proc.map(|p| p.valor_medio_procedimento),
            internacoes_por_1000: derived.internacoes_por_1000,
            procedimentos_por_1000: derived.procedimentos_por_1000,
            gasto_internacao_per_capita: derived.gasto_internacao_per_capita,
        });
    }

    Ok(MunicipalityTable::new(rows))
}

fn index_unique<T>(
    relation: &str,
    rows: Vec<T>,
    key: impl Fn(&T) -> i64,
) -> PipelineResult<HashMap<i64, T>> {
    let mut map = HashMap::with_capacity(rows.len());
    for row in rows {
        let codigo = key(&row);
        if map.insert(codigo, row).is_some() {
            return Err(PipelineError::DataShape(format!(
                "duplicate codigo_ibge {codigo} in {relation}; the join would fan out"
            )));
        }
    }
    Ok(map)
}

#[cfg(test)]
#[path = "join_test.rs"]
mod tests;
