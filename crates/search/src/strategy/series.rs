use cardex_protocol::{EntityData, SearchResult, SeriesData};
use cardex_store::{CardStore, Result, SeriesRecord};

/// Series hits carry a flat score; the catalog has no signal worth
/// discriminating on yet.
const SCORE_SERIES: f32 = 75.0;

pub(crate) async fn search(
    store: &dyn CardStore,
    raw_query: &str,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let series = store.find_series(raw_query.trim(), limit).await?;
    Ok(series.into_iter().map(to_result).collect())
}

fn to_result(series: SeriesRecord) -> SearchResult {
    let title = match series.year {
        Some(year) => format!("{year} {}", series.name),
        None => series.name.clone(),
    };
    SearchResult::new(
        series.id,
        title,
        SCORE_SERIES,
        EntityData::Series(SeriesData {
            name: series.name,
            set_name: series.set_name,
            manufacturer: series.manufacturer,
            year: series.year,
        }),
    )
}
