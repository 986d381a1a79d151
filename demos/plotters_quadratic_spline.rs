extern crate plotters;
use plotters::prelude::*;

extern crate quadspline;
use quadspline::{curve_to_quadratic, CubicBezier, Point2, Spline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cubic = CubicBezier::new(
        Point2::new(10f64, 3f64),
        Point2::new(250f64, 80f64),
        Point2::new(-40f64, 500f64),
        Point2::new(300f64, 420f64),
    );
    let cpoints: Vec<(f64, f64)> = cubic.control_points().iter().map(|&p| p.into()).collect();

    let approx = curve_to_quadratic(&cubic, 10, 4.0)?;
    let spoints: Vec<(f64, f64)> = approx.spline.points().iter().map(|&p| p.into()).collect();

    // render both curves to desired accuracy
    let nsteps: usize = 1000;
    let mut cubic_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps + 1);
    let mut spline_graph: Vec<(f64, f64)> = Vec::with_capacity(nsteps + 1);
    for t in 0..=nsteps {
        let t = t as f64 / (nsteps as f64);
        cubic_graph.push(cubic.eval(t).into());
        spline_graph.push(approx.spline.eval(t).into());
    }

    let root =
        BitMapBackend::new("quadratic_spline_approximation.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!(
        "{} quadratic segments, max. error {:.3}",
        approx.segments, approx.error
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-60f64..320f64, -20f64..520f64)?;

    chart.configure_mesh().draw()?;

    // control polygon of the cubic
    chart
        .draw_series(LineSeries::new(cpoints.clone(), BLUE.mix(0.4)))?
        .label("Cubic control polygon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(PointSeries::of_element(
            cpoints,
            4,
            &BLUE,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?;

    // off-curve points of the spline, joints are midpoints of neighbours
    chart
        .draw_series(PointSeries::of_element(
            spoints,
            3,
            &GREEN,
            &|coord, size, style| {
                EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled())
            },
        ))?
        .label("Spline points")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, GREEN.filled()));

    chart
        .draw_series(LineSeries::new(cubic_graph, &RED))?
        .label("Cubic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(spline_graph, &BLACK))?
        .label("Quadratic spline")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
