use crate::data::Dataset;
use crate::mapper::{AxisSelection, MappingSession};
use crate::scale::{self, AxisScale};
use crate::CloudOptions;
use serde::Serialize;

/// One rendered record. `index` is the back-reference into the dataset's
/// rows, for selection and inspection by the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Point {
    pub index: usize,
    pub position: [f64; 3],
    pub size: f64,
    pub hue: f64,
}

/// What the renderer needs to label one axis.
#[derive(Debug, Clone, Serialize)]
pub struct AxisMeta {
    pub column: String,
    pub categorical: bool,
    /// Legend labels in code order; empty for numeric axes.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxesMeta {
    pub x: AxisMeta,
    pub y: AxisMeta,
    pub z: AxisMeta,
}

/// The full normalized cloud handed to the external renderer.
#[derive(Debug, Clone, Serialize)]
pub struct PointCloud {
    pub rows: usize,
    pub axes: AxesMeta,
    pub points: Vec<Point>,
}

/// Map the selected columns to numeric sequences, fit one scale per axis,
/// and emit one normalized point per record.
pub fn build_cloud(
    data: &Dataset,
    selection: &AxisSelection,
    session: &mut MappingSession,
    options: &CloudOptions,
) -> PointCloud {
    let columns = [&selection.x, &selection.y, &selection.z];
    let mapped: Vec<Vec<f64>> = columns
        .iter()
        .map(|column| session.map_to_numeric(data, column))
        .collect();
    let scales: Vec<AxisScale> = mapped
        .iter()
        .map(|values| AxisScale::fit(values, options.scale))
        .collect();

    let rows = data.rows.len();
    let size = scale::point_size(rows);

    let points = (0..rows)
        .map(|index| Point {
            index,
            position: [
                scales[0].project(mapped[0][index]),
                scales[1].project(mapped[1][index]),
                scales[2].project(mapped[2][index]),
            ],
            size,
            hue: scale::point_hue(index, rows),
        })
        .collect();

    // A column is reported categorical exactly when the session holds an
    // encoding for it, mirroring what map_to_numeric just decided
    let axis_meta = |column: &str| match session.category_mapping(column) {
        Some(map) => AxisMeta {
            column: column.to_string(),
            categorical: true,
            categories: map.labels().iter().map(|v| v.to_string()).collect(),
        },
        None => AxisMeta {
            column: column.to_string(),
            categorical: false,
            categories: Vec::new(),
        },
    };

    PointCloud {
        rows,
        axes: AxesMeta {
            x: axis_meta(&selection.x),
            y: axis_meta(&selection.y),
            z: axis_meta(&selection.z),
        },
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Value;
    use crate::mapper;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn number(n: f64) -> Value {
        Value::Number(n)
    }

    fn make_mixed_dataset() -> Dataset {
        Dataset::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![
                vec![number(1.0), text("red"), number(10.0)],
                vec![number(2.0), text("blue"), number(20.0)],
                vec![number(3.0), text("red"), number(30.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_build_cloud_scenario() {
        let data = make_mixed_dataset();
        let selection = mapper::detect_best_columns(&data);
        let mut session = MappingSession::new();
        let cloud = build_cloud(&data, &selection, &mut session, &CloudOptions::default());

        assert_eq!(cloud.rows, 3);
        assert_eq!(cloud.axes.x.column, "a");
        assert_eq!(cloud.axes.y.column, "c");
        assert_eq!(cloud.axes.z.column, "b");
        assert!(!cloud.axes.x.categorical);
        assert!(cloud.axes.z.categorical);
        assert_eq!(cloud.axes.z.categories, vec!["red", "blue"]);

        // a: 1..3 and c: 10..30 both span their axis; b codes are [0,1,0]
        assert_eq!(cloud.points[0].position, [-5.0, -5.0, -5.0]);
        assert_eq!(cloud.points[1].position, [0.0, 0.0, 5.0]);
        assert_eq!(cloud.points[2].position, [5.0, 5.0, -5.0]);
    }

    #[test]
    fn test_point_cosmetics() {
        let data = make_mixed_dataset();
        let selection = mapper::detect_best_columns(&data);
        let mut session = MappingSession::new();
        let cloud = build_cloud(&data, &selection, &mut session, &CloudOptions::default());

        let expected_size = (0.2 / 3f64.sqrt()).max(0.05);
        for (i, point) in cloud.points.iter().enumerate() {
            assert_eq!(point.index, i);
            assert_eq!(point.size, expected_size);
            assert_eq!(point.hue, i as f64 / 3.0);
        }
    }

    #[test]
    fn test_duplicated_axis_shares_encoding() {
        let data = Dataset::new(
            vec!["b".to_string()],
            vec![vec![text("red")], vec![text("blue")]],
        )
        .unwrap();
        let selection = mapper::detect_best_columns(&data);
        let mut session = MappingSession::new();
        let cloud = build_cloud(&data, &selection, &mut session, &CloudOptions::default());

        // One column drives all three axes with one shared encoding
        assert_eq!(cloud.axes.x.column, "b");
        assert_eq!(cloud.axes.z.column, "b");
        assert_eq!(cloud.axes.x.categories, cloud.axes.z.categories);
        assert_eq!(cloud.points[0].position, [-5.0, -5.0, -5.0]);
        assert_eq!(cloud.points[1].position, [5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_custom_scale() {
        let data = make_mixed_dataset();
        let selection = mapper::detect_best_columns(&data);
        let mut session = MappingSession::new();
        let options = CloudOptions { scale: 2.0 };
        let cloud = build_cloud(&data, &selection, &mut session, &options);
        assert_eq!(cloud.points[0].position[0], -1.0);
        assert_eq!(cloud.points[2].position[0], 1.0);
    }
}
