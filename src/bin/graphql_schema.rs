use calendar_gateway::error::GatewayResult;
use calendar_gateway::graphql::schema_sdl;
use std::env;
use std::fs;

/// Print the gateway schema as SDL, or write it to the path given as the first argument
fn main() -> GatewayResult<()> {
    let sdl = schema_sdl();

    match env::args().nth(1) {
        Some(path) => {
            fs::write(&path, sdl)?;
            println!("Wrote GraphQL schema to {}", path);
        }
        None => print!("{}", sdl),
    }

    Ok(())
}
