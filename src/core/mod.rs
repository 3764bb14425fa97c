pub mod axis;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;
pub mod zone;

pub use axis::{Axis, AxisOrientation};
pub use primitives::{
    format_category_label, format_label_date, parse_local_timestamp, snap_to_precision,
};
pub use scale::{LinearScale, ScaleMode};
pub use series::{
    POPUP_ON_CLICK_CLASS, PointRef, Series, SeriesId, SeriesKind, SeriesStore, SeriesValue,
    parse_series_values,
};
pub use types::{DataPoint, PlotArea, Viewport};
pub use zone::{PlotBand, Zone};
