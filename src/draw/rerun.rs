use crate::draw::config::PlotConfig;
use crate::style::{Rgba, StyledFace};
use crate::{Face, Point};
use anyhow::Result;
use rerun as rr;
use rerun::components::Radius;
use std::path::Path;

/// Converts Point to native format of Rerun.
///
/// Rerun's 2D view has y pointing down, so y is flipped to keep plots y-up.
fn to_view(x: f64, y: f64) -> rr::Vec2D {
    rr::Vec2D([x as f32, -y as f32])
}

impl From<Point> for rr::Vec2D {
    fn from(val: Point) -> Self {
        to_view(val.x, val.y)
    }
}

/// sRGB channels in 0.0..=1.0 to bytes, without any gamma conversion.
fn to_rgba8(rgba: Rgba) -> [u8; 4] {
    let (r, g, b, a) = rgba;
    [r, g, b, a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn color(rgba: Rgba) -> rr::Color {
    let [r, g, b, a] = to_rgba8(rgba);
    rr::Color(rr::Rgba32::from_unmultiplied_rgba(r, g, b, a))
}

/// Spawns a Rerun viewer and connects a recording to it.
pub fn start_session(config: &PlotConfig) -> Result<rr::RecordingStream> {
    let session = rr::RecordingStreamBuilder::new(config.session_name.as_str()).spawn()?;
    Ok(session)
}

/// Creates a recording written to an `.rrd` file.
pub fn save_session(config: &PlotConfig, path: &Path) -> Result<rr::RecordingStream> {
    let session = rr::RecordingStreamBuilder::new(config.session_name.as_str()).save(path)?;
    Ok(session)
}

/// Closed outline of a face in view coordinates.
pub fn outline_strip(face: &Face) -> Vec<rr::Vec2D> {
    let (xs, ys) = face.outline();
    xs.into_iter().zip(ys).map(|(x, y)| to_view(x, y)).collect()
}

/// Draws one face as a closed polyline, plus markers if its style has one.
///
/// `fallback` is used when the style names no color.
pub fn draw_face(
    session: &rr::RecordingStream,
    styled: &StyledFace,
    fallback: Rgba,
    config: &PlotConfig,
) -> Result<()> {
    let style = styled.token.style();
    let rgba = style.color.unwrap_or(fallback);
    let name = format!("{}/face_{:03}", config.entity_prefix, styled.index);

    tracing::debug!(
        face = styled.index,
        points = styled.face.len(),
        area = styled.face.signed_area(),
        token = %styled.token,
        "drawing face"
    );

    if style.line.is_some() {
        session.log_static(
            format!("{name}/outline"),
            &rr::LineStrips2D::new(vec![outline_strip(styled.face)])
                .with_radii([Radius::new_ui_points(config.line_radius)])
                .with_colors([color(rgba)])
                .with_labels([styled.token.as_str()]),
        )?;
    }

    if style.marker.is_some() {
        let vertices: Vec<rr::Vec2D> = styled.face.pts().iter().map(|&p| p.into()).collect();
        session.log_static(
            format!("{name}/vertices"),
            &rr::Points2D::new(vertices)
                .with_radii([Radius::new_ui_points(config.marker_size / 2.0)])
                .with_colors([color(rgba)]),
        )?;
    }

    Ok(())
}

/// Draws all faces in order.
///
/// Faces without a color in their style take colors from the color cycle,
/// indexed by face position.
pub fn draw_faces(
    session: &rr::RecordingStream,
    faces: &[StyledFace],
    config: &PlotConfig,
) -> Result<()> {
    let cycle = config.color_cycle_rgba()?;
    for styled in faces {
        let fallback = if cycle.is_empty() {
            (0.0, 0.0, 0.0, 1.0)
        } else {
            cycle[styled.index % cycle.len()]
        };
        draw_face(session, styled, fallback, config)?;
    }
    Ok(())
}
