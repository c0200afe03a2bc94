use clap::Parser;
use macroquad::prelude::*;
use macroquad::Window;
use life_automaton::{config::Args, input, rendering, Automaton, Session};

fn window_conf(args: &Args) -> Conf {
    Conf {
        window_title: "Cellular Automaton".to_owned(),
        window_width: args.window_width as i32,
        window_height: args.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(mut session: Session) {
    loop {
        let mouse_pos = mouse_position();

        input::handle_mouse_paint(&mut session, mouse_pos);
        session = input::process_keyboard_input(session);

        session.tick(get_frame_time());

        rendering::draw_frame(&session);

        next_frame().await;
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let automaton = match args.automaton_config().and_then(Automaton::new) {
        Ok(automaton) => automaton,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    let session = Session::new(automaton, args.frame_rate(), args.pixel_size as f32);
    Window::from_config(window_conf(&args), run(session));
}
