use sankaku::app::App;
use sankaku::config::Config;
use sankaku::logging::init_logging;
use sankaku::window::Window;

fn main() -> Result<(), sankaku::Error> {
    let config = Config::default();
    init_logging(config.logging.clone());

    let mut window = Window::new(&config)?;
    let mut app = App::new(config);
    app.run(&mut window)
}
