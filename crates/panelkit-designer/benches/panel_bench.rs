use criterion::{black_box, criterion_group, criterion_main, Criterion};

use panelkit_core::{create_panel_dimensions, Vector2};
use panelkit_designer::{
    build_panel_svg, create_panel_element, generate_default_mounting_holes, PanelElementType,
    PanelModel, SvgOptions,
};

fn crowded_model() -> PanelModel {
    let mut model = PanelModel::new(create_panel_dimensions(42.0));
    for row in 0..6 {
        for col in 0..12 {
            let element_type = PanelElementType::ALL[(row * 12 + col) % 5];
            model.elements.push(create_panel_element(
                element_type,
                Vector2::new(10.0 + col as f64 * 32.0, 12.0 + row as f64 * 19.0),
            ));
        }
    }
    model
}

fn bench_mounting_holes(c: &mut Criterion) {
    let dimensions = create_panel_dimensions(42.0);
    c.bench_function("generate_mounting_holes_42cm", |b| {
        b.iter(|| generate_default_mounting_holes(black_box(&dimensions)))
    });
}

fn bench_svg_export(c: &mut Criterion) {
    let model = crowded_model();
    let holes = generate_default_mounting_holes(&model.dimensions);
    let options = SvgOptions::default();
    c.bench_function("build_panel_svg_72_elements", |b| {
        b.iter(|| build_panel_svg(black_box(&model), black_box(&holes), black_box(&options)))
    });
}

criterion_group!(benches, bench_mounting_holes, bench_svg_export);
criterion_main!(benches);
