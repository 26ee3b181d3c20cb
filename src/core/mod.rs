pub mod calendar;
pub mod chart;
pub mod observation;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod types;

pub use calendar::{
    Clock, DateRange, FixedClock, RangePreset, SystemClock, local_date_only, parse_calendar_day,
    short_day_label,
};
pub use chart::TrendChart;
pub use observation::{
    IngestDiagnostics, IngestReport, RawObservation, ingest_observations, parse_observations_json,
};
pub use scale::{LinearScale, TickOptions, TrendScale, build_scale};
pub use series::{NormalizedSeries, normalize};
pub use ticks::{DayTick, DayTicks, count_tick_step, count_ticks, day_ticks, nice_number};
pub use types::{Margins, PlotArea, TimeSeriesPoint, Viewport};
