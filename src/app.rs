use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use crate::client::{ChatMessage, OllamaClient};
use crate::consts::{CHAT_PROMPT, SIMILARITY_TOP_K};
use crate::error::AppError;
use crate::output::{
    NumberFormat, format_compact, format_seconds, light_rule, output_estimate_json,
    output_tracks_json, print_estimate_table, print_header, print_prompt, print_run_footer,
    print_tracks_table,
};
use crate::pricing::{InferenceRun, PricingCatalog};
use crate::rag::{QueryEngine, VectorIndex, chunk_document, load_document};
use crate::tracks::{Track, TrackKey};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) catalog: &'a PricingCatalog,
    pub(crate) number_format: NumberFormat,
}

fn stream_to_stdout(fragment: &str) {
    print!("{fragment}");
    let _ = std::io::stdout().flush();
}

pub(crate) fn run_chat(ctx: &CommandContext<'_>, prompt: Option<&str>) -> Result<(), AppError> {
    let prompt = prompt.unwrap_or(CHAT_PROMPT);
    let client = OllamaClient::new(&ctx.cli.host, ctx.cli.request_timeout());

    print_header(
        "Open Source AI, Running Locally",
        &ctx.cli.model,
        client.host(),
    );
    print_prompt("Prompt", prompt);

    let start = Instant::now();
    let counts = client.chat_stream(
        &ctx.cli.model,
        vec![ChatMessage::user(prompt)],
        stream_to_stdout,
    )?;
    let elapsed = start.elapsed().as_secs_f64();

    let run = InferenceRun::new(elapsed, counts.input_tokens, counts.output_tokens);
    print_run_footer(&run, ctx.catalog, ctx.number_format);
    println!("\nThat's it. Local AI. Private. And virtually free.\n");
    Ok(())
}

pub(crate) fn run_rag(
    ctx: &CommandContext<'_>,
    track_key: TrackKey,
    all_queries: bool,
    custom_query: Option<&str>,
) -> Result<(), AppError> {
    let track = track_key.track();
    let data_path = track.data_path(Path::new(&ctx.cli.data_dir));

    // Read the dataset before touching the network so a missing file fails
    // with a path, not a connection error.
    let document = load_document(&data_path)?;
    let passages = chunk_document(&document);

    let client = OllamaClient::new(&ctx.cli.host, ctx.cli.request_timeout());
    print_header(
        &format!("RAG Demo: {}", track.name),
        &ctx.cli.model,
        client.host(),
    );
    println!("Loading civic data: {}", track.file);
    println!(
        "  {} passages, {} characters\n",
        passages.len(),
        format_compact(document.chars().count() as i64, ctx.number_format)
    );

    println!("Building vector index...");
    let start = Instant::now();
    let index = VectorIndex::build(&client, &ctx.cli.embed_model, passages)?;
    println!(
        "  Index ready: {} passages embedded in {}\n",
        index.len(),
        format_seconds(start.elapsed().as_secs_f64())
    );

    let engine = QueryEngine::new(
        &client,
        &index,
        &ctx.cli.model,
        &ctx.cli.embed_model,
        SIMILARITY_TOP_K,
    );

    let queries = select_queries(track, all_queries, custom_query);

    for (i, query) in queries.iter().enumerate() {
        println!("{}", light_rule());
        println!("Question {}: {query}\n", i + 1);
        println!("Answer:\n");

        let start = Instant::now();
        let counts = engine.query(query, stream_to_stdout)?;
        let elapsed = start.elapsed().as_secs_f64();

        let run = InferenceRun::new(elapsed, counts.input_tokens, counts.output_tokens);
        print_run_footer(&run, ctx.catalog, ctx.number_format);
    }

    println!("\nReal civic data + local AI + zero cost = civic tech prototype\n");
    Ok(())
}

/// A custom question trumps everything; `--all` runs the track's full sample
/// set; otherwise the demo asks just the first sample question.
fn select_queries<'a>(track: &'a Track, all: bool, custom: Option<&'a str>) -> Vec<&'a str> {
    match custom {
        Some(query) => vec![query],
        None if all => track.queries.to_vec(),
        None => vec![track.queries[0]],
    }
}

pub(crate) fn run_tracks(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_tracks_json());
    } else {
        print_tracks_table(ctx.cli.use_color());
    }
}

pub(crate) fn run_estimate(ctx: &CommandContext<'_>, input: i64, output: i64, seconds: f64) {
    let run = InferenceRun::new(seconds, input, output);
    if ctx.cli.json {
        println!("{}", output_estimate_json(&run, ctx.catalog));
    } else {
        print_estimate_table(&run, ctx.catalog, ctx.number_format, ctx.cli.use_color());
    }
}
