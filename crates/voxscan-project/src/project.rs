//! Occupancy-to-point projection.

use glam::Vec3;

use crate::color::ColorTable;
use crate::error::ProjectResult;
use crate::field::{self, GridDimensions};
use crate::{DEFAULT_VOXEL_SIZE, RenderPoint};

/// Project occupied cells into positioned, colored points.
///
/// Cells are visited with `z` outermost and `x` innermost, and the output
/// keeps that order. A cell is occupied when its value is `> 0`; its point
/// sits at `(x, y, z) * voxel_size` and takes the color of `labels[z][y]`.
///
/// An occupancy grid with any zero-length axis yields no points, whatever
/// the labels hold. Otherwise every `(z, y)` column must have a label, even
/// when it has no occupied cells.
///
/// # Errors
///
/// - [`ProjectError::OutOfRange`] if `labels` does not cover the grid
/// - [`ProjectError::RaggedLayer`] / [`ProjectError::RaggedRow`] if a layer
///   or row is shorter than the extent read from `occupancy[0][0]`
///
/// [`ProjectError::OutOfRange`]: crate::ProjectError::OutOfRange
/// [`ProjectError::RaggedLayer`]: crate::ProjectError::RaggedLayer
/// [`ProjectError::RaggedRow`]: crate::ProjectError::RaggedRow
#[allow(clippy::cast_precision_loss)]
pub fn project(
    occupancy: &[Vec<Vec<f32>>],
    labels: &[Vec<i32>],
    colors: &ColorTable,
    voxel_size: f32,
) -> ProjectResult<Vec<RenderPoint>> {
    let dims = GridDimensions::of(occupancy);
    if dims.is_empty() {
        return Ok(Vec::new());
    }
    field::check_labels(labels, dims)?;

    let mut points = Vec::new();
    for z in 0..dims.depth {
        for y in 0..dims.height {
            let row = field::row(occupancy, dims, z, y)?;
            let color = colors.resolve(labels[z][y]);
            for (x, &value) in row.iter().enumerate() {
                if value > 0.0 {
                    let index = Vec3::new(x as f32, y as f32, z as f32);
                    points.push(RenderPoint::new(index * voxel_size, color));
                }
            }
        }
    }
    Ok(points)
}

/// [`project`] with [`DEFAULT_VOXEL_SIZE`].
pub fn project_default(
    occupancy: &[Vec<Vec<f32>>],
    labels: &[Vec<i32>],
    colors: &ColorTable,
) -> ProjectResult<Vec<RenderPoint>> {
    project(occupancy, labels, colors, DEFAULT_VOXEL_SIZE)
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use super::*;
    use crate::{Color, LabelField, OccupancyField, ProjectError};

    fn scan() -> impl Strategy<Value = (OccupancyField, LabelField)> {
        (1usize..5, 1usize..5, 1usize..5).prop_flat_map(|(depth, height, width)| {
            (
                vec(vec(vec(-1.0f32..1.0, width), height), depth),
                vec(vec(0i32..6, height), depth),
            )
        })
    }

    fn map_cells(occupancy: &mut OccupancyField, f: impl Fn(f32) -> f32) {
        for cell in occupancy.iter_mut().flatten().flatten() {
            *cell = f(*cell);
        }
    }

    #[test]
    fn two_by_two_scenario() {
        let occupancy = vec![vec![vec![1.0, 0.0], vec![0.0, 2.0]]];
        let labels = vec![vec![0, 1]];
        let colors: ColorTable = [(0, Color::RED)].into_iter().collect();

        let points = project(&occupancy, &labels, &colors, 1.0).unwrap();
        assert_eq!(
            points,
            vec![
                RenderPoint::new(Vec3::new(0.0, 0.0, 0.0), Color::RED),
                RenderPoint::new(Vec3::new(1.0, 1.0, 0.0), Color::WHITE),
            ]
        );
    }

    #[test]
    fn zero_depth_yields_nothing() {
        let colors = ColorTable::semantic();
        assert!(project(&[], &[], &colors, 1.0).unwrap().is_empty());
        assert!(project(&[], &[vec![1, 2]], &colors, 1.0).unwrap().is_empty());
    }

    #[test]
    fn zero_width_yields_nothing_even_without_labels() {
        let occupancy = vec![vec![vec![]; 3]; 2];
        let points = project(&occupancy, &[], &ColorTable::default(), 1.0).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn empty_table_colors_everything_default() {
        let occupancy = vec![
            vec![vec![1.0, 0.5], vec![0.0, 3.0]],
            vec![vec![2.0, 0.0], vec![0.0, 0.0]],
        ];
        let labels = vec![vec![0, 1], vec![2, 3]];
        let colors = ColorTable::new(Color::BLACK);

        let points = project(&occupancy, &labels, &colors, 1.0).unwrap();
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| p.color == Color::BLACK));
    }

    #[test]
    fn short_label_row_is_out_of_range() {
        let occupancy = vec![vec![vec![1.0], vec![1.0], vec![1.0]]];
        let labels = vec![vec![0, 0]];
        let err = project(&occupancy, &labels, &ColorTable::semantic(), 1.0).unwrap_err();
        assert_eq!(
            err,
            ProjectError::OutOfRange {
                z: 0,
                y: 2,
                depth: 1,
                height: 2
            }
        );
    }

    #[test]
    fn missing_labels_fail_even_for_empty_columns() {
        let occupancy = vec![vec![vec![0.0]], vec![vec![0.0]]];
        let labels = vec![vec![0]];
        assert!(matches!(
            project(&occupancy, &labels, &ColorTable::semantic(), 1.0),
            Err(ProjectError::OutOfRange { z: 1, .. })
        ));
    }

    #[test]
    fn ragged_row_is_reported() {
        let occupancy = vec![vec![vec![1.0, 1.0], vec![1.0]]];
        let labels = vec![vec![0, 0]];
        assert!(matches!(
            project(&occupancy, &labels, &ColorTable::semantic(), 1.0),
            Err(ProjectError::RaggedRow { z: 0, y: 1, .. })
        ));
    }

    #[test]
    fn default_voxel_size() {
        let occupancy = vec![vec![vec![0.0, 0.0, 1.0]]];
        let labels = vec![vec![2]];
        let points = project_default(&occupancy, &labels, &ColorTable::semantic()).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].position, Vec3::new(2.0, 0.0, 0.0) * DEFAULT_VOXEL_SIZE);
        assert_eq!(points[0].color, Color::BLUE);
    }

    #[test]
    fn nan_cells_are_empty() {
        let occupancy = vec![vec![vec![f32::NAN, 1.0]]];
        let labels = vec![vec![0]];
        let points = project(&occupancy, &labels, &ColorTable::semantic(), 1.0).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].position, Vec3::X);
    }

    proptest! {
        #[test]
        fn all_empty_yields_nothing((mut occupancy, labels) in scan()) {
            map_cells(&mut occupancy, |v| -v.abs());
            let points = project(&occupancy, &labels, &ColorTable::semantic(), 0.1).unwrap();
            prop_assert!(points.is_empty());
        }

        #[test]
        fn all_occupied_yields_every_cell((mut occupancy, labels) in scan()) {
            map_cells(&mut occupancy, |v| v.abs() + 0.5);
            let dims = GridDimensions::of(&occupancy);
            let points = project(&occupancy, &labels, &ColorTable::semantic(), 0.1).unwrap();
            prop_assert_eq!(points.len(), dims.cell_count());
        }

        #[test]
        fn count_matches_occupied_cells((occupancy, labels) in scan()) {
            let points = project(&occupancy, &labels, &ColorTable::semantic(), 0.1).unwrap();
            prop_assert_eq!(points.len(), field::occupied_count(&occupancy));
        }

        #[test]
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn output_is_ordered_z_y_x((occupancy, labels) in scan()) {
            let points = project(&occupancy, &labels, &ColorTable::semantic(), 1.0).unwrap();
            let keys: Vec<_> = points
                .iter()
                .map(|p| (p.position.z as usize, p.position.y as usize, p.position.x as usize))
                .collect();
            prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        #[allow(clippy::cast_precision_loss)]
        fn positions_and_colors_follow_cells(
            (occupancy, labels) in scan(),
            voxel_size in 0.001f32..10.0,
        ) {
            // Labels 4 and 5 are deliberately absent from the table.
            let colors = ColorTable::semantic();
            let points = project(&occupancy, &labels, &colors, voxel_size).unwrap();

            let mut expected = Vec::new();
            for (z, layer) in occupancy.iter().enumerate() {
                for (y, row) in layer.iter().enumerate() {
                    for (x, &value) in row.iter().enumerate() {
                        if value > 0.0 {
                            let position = Vec3::new(
                                x as f32 * voxel_size,
                                y as f32 * voxel_size,
                                z as f32 * voxel_size,
                            );
                            let color = match labels[z][y] {
                                0 => Color::RED,
                                1 => Color::GREEN,
                                2 => Color::BLUE,
                                3 => Color::YELLOW,
                                _ => Color::WHITE,
                            };
                            expected.push(RenderPoint::new(position, color));
                        }
                    }
                }
            }
            prop_assert_eq!(points, expected);
        }
    }
}
