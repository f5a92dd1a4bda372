use std::{f64::consts::PI, time::Instant};

use clap::{value_t, App, Arg, ArgMatches};
use log::{error, info, LevelFilter};

use phong_tracer::{
    camera::Camera,
    lighting::PointLight,
    material::{Color, Material},
    math::{Matrix4, Tuple},
    object::Object,
    pattern::Pattern,
    world::{World, WorldOptions},
    Error,
};

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// A checkered mirror-ish floor, a striped back wall and three spheres.
fn demo_world(max_depth: u32) -> World {
    let floor = Object::plane(
        Matrix4::identity(),
        Material {
            pattern: Some(Pattern::checker(
                Color::white(),
                Color::new(0.15, 0.15, 0.15),
                Matrix4::identity(),
            )),
            specular: 0.,
            reflective: 0.3,
            ..Default::default()
        },
    );

    let wall = Object::plane(
        Matrix4::identity().rotate_x(PI / 2.).translate(0., 0., 10.),
        Material {
            pattern: Some(Pattern::stripe(
                Color::new(0.9, 0.85, 0.7),
                Color::new(0.7, 0.6, 0.45),
                Matrix4::identity().scale(0.5, 0.5, 0.5).rotate_y(PI / 4.),
            )),
            specular: 0.,
            ..Default::default()
        },
    );

    let middle = Object::sphere(
        Matrix4::translation(-0.5, 1., 0.5),
        Material {
            color: Color::new(0.1, 0.1, 0.15),
            diffuse: 0.3,
            specular: 1.,
            shininess: 300.,
            reflective: 0.9,
            ..Default::default()
        },
    );

    let right = Object::sphere(
        Matrix4::identity().scale(0.5, 0.5, 0.5).translate(1.5, 0.5, -0.5),
        Material {
            pattern: Some(Pattern::gradient(
                Color::new(0.1, 0.5, 1.),
                Color::new(1., 0.2, 0.3),
                Matrix4::identity().scale(2., 1., 1.).translate(-1., 0., 0.),
            )),
            diffuse: 0.7,
            specular: 0.3,
            ..Default::default()
        },
    );

    let left = Object::sphere(
        Matrix4::identity().scale(0.33, 0.33, 0.33).translate(-1.5, 0.33, -0.75),
        Material {
            pattern: Some(Pattern::ring(
                Color::new(1., 0.8, 0.1),
                Color::new(0.9, 0.4, 0.),
                Matrix4::scaling(0.2, 0.2, 0.2),
            )),
            diffuse: 0.7,
            specular: 0.3,
            ..Default::default()
        },
    );

    let light = PointLight::new(Tuple::point(-10., 10., -10.), Color::white());
    World::new(light, vec![floor, wall, middle, right, left])
        .with_options(WorldOptions { max_depth })
}

/// Render settings taken from the command line.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    width: usize,
    height: usize,
    fov: f64,
    max_depth: u32,
    output: String,
}

impl Options {
    /// Read the typed flag values. Malformed numbers are reported, never replaced by defaults.
    fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        Ok(Self {
            width: value_t!(matches, "width", usize)?,
            height: value_t!(matches, "height", usize)?,
            fov: value_t!(matches, "fov", f64)?.to_radians(),
            max_depth: value_t!(matches, "max-depth", u32)?,
            output: value_t!(matches, "output", String)?,
        })
    }
}

fn run(options: &Options) -> Result<(), Error> {
    let now = Instant::now();

    let world = demo_world(options.max_depth);
    let camera = Camera::new(options.width, options.height, options.fov).with_transform(
        Matrix4::view_transform(
            Tuple::point(0., 1.5, -5.),
            Tuple::point(0., 1., 0.),
            Tuple::vector(0., 1., 0.),
        ),
    );
    info!("scene constructed in {}s", now.elapsed().as_secs_f32());

    camera.render(&world).save_png(&options.output)?;
    info!("wrote {} in {}s", options.output, now.elapsed().as_secs_f32());

    Ok(())
}

fn app() -> App<'static, 'static> {
    App::new("phong-tracer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders a demo scene with Phong shading, shadows and reflections")
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .help("The output file")
                .default_value("render.png"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .help("Image width in pixels")
                .default_value("800"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .help("Image height in pixels")
                .default_value("400"),
        )
        .arg(
            Arg::with_name("fov")
                .long("fov")
                .help("Field of view in degrees")
                .default_value("60"),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .short("d")
                .help("Maximum number of reflection bounces")
                .default_value("5"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
}

fn main() {
    let matches = app().get_matches();
    let options = Options::from_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_logger(level);

    if let Err(e) = run(&options) {
        error!("failed to render: {}", e);
        std::process::exit(1);
    }
}
