use clap::Args;

#[derive(Args)]
pub struct GreetArgs {
    /// Name to greet
    #[arg(long, default_value = "world")]
    pub name: String,
}

pub fn run(args: &GreetArgs) {
    render(&args.name);
}

/// Prints the static greeting screen.
pub fn render(name: &str) {
    println!("{}", greeting(name));
}

fn greeting(name: &str) -> String {
    format!("Hello {}!", name)
}
