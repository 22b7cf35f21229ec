use dotenv::dotenv;
use statement_analyzer::llm::{inline_error_message, FinancialAnalyst, GeminiClient};
use statement_analyzer::{render_markdown, AnalysisSession, StatementTable};
use std::error::Error;
use std::io::{self, Write};

/// Load a three-column CSV (label, prior, current). The header row, if
/// present, is skipped by the reader; cell coercion happens in the library.
fn load_table(path: &str) -> Result<StatementTable, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    Ok(StatementTable::from_records(records)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "statement.csv".to_string());

    println!("📊 Analyzing {}...\n", path);

    let table = load_table(&path)?;
    let mut session = AnalysisSession::new();
    let analysis = session.analyze(&table)?.clone();

    println!("{}", render_markdown(&analysis));

    let analyst = match GeminiClient::from_env() {
        Ok(client) => Some(FinancialAnalyst::new(client)),
        Err(e) => {
            // The numeric analysis above still works without a key.
            println!("{}\n", inline_error_message(&e));
            None
        }
    };

    let Some(analyst) = analyst else {
        return Ok(());
    };

    println!("🤖 Requesting AI commentary...\n");
    match analyst.commentary(&analysis).await {
        Ok(text) => println!("{}\n", text),
        Err(e) => println!("{}\n", inline_error_message(&e)),
    }

    session.seed_chat_context(&analysis);

    println!("💬 Ask follow-up questions (type 'quit' to exit).");
    println!("------------------------------------------------------------------");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let question = input.trim();

        if question.eq_ignore_ascii_case("quit") || question.eq_ignore_ascii_case("exit") {
            break;
        }

        if question.is_empty() {
            continue;
        }

        println!("\nThinking...");

        let reply = match analyst.send_conversation(session.history(), question).await {
            Ok(reply) => reply,
            Err(e) => inline_error_message(&e),
        };

        println!("\n{}\n", reply);
        println!("------------------------------------------------------------------");

        session.record_exchange(question, reply);
    }

    Ok(())
}
