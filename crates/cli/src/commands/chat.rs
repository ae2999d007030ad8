//! Chat command handler.
//!
//! Interactive loop on stdin. The pipeline and its LLM client are created once
//! and reused for every question in the session.

use crate::commands::output::format_result;
use clap::Args;
use infohub_core::{config::AppConfig, AppResult};
use infohub_knowledge::AnswerPipeline;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Questions offered to first-time users.
pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "რა არის დღგ?",
    "საშემოსავლო გადასახადის განაკვეთი",
    "იმპორტის საბაჟო პროცედურები",
    "საგადასახადო დავის გასაჩივრება",
];

/// Interactive question-answer session
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Do not print the example questions on start
    #[arg(long)]
    pub no_examples: bool,
}

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatInput {
    Exit,
    History,
    Empty,
    Question(String),
}

impl ChatInput {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "/exit" | "/quit" => Self::Exit,
            "/history" => Self::History,
            "" => Self::Empty,
            question => Self::Question(question.to_string()),
        }
    }
}

/// A question and the answer given in this session.
#[derive(Debug, Clone)]
struct Turn {
    question: String,
    answer: String,
}

fn format_history(turns: &[Turn]) -> String {
    if turns.is_empty() {
        return "(ისტორია ცარიელია)".to_string();
    }

    turns
        .iter()
        .enumerate()
        .map(|(i, turn)| format!("[{}] შეკითხვა: {}\n{}", i + 1, turn.question, turn.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl ChatCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let pipeline = AnswerPipeline::from_config(config)?;
        pipeline.connect().await?;

        println!("საგადასახადო/საბაჟო ასისტენტი");
        if !self.no_examples {
            println!("სცადეთ ერთ-ერთი მაგალითი:");
            for example in EXAMPLE_QUESTIONS {
                println!("  - {}", example);
            }
        }
        println!("ბრძანებები: /history, /exit");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut turns: Vec<Turn> = Vec::new();

        loop {
            print!("\n> ");
            std::io::stdout().flush()?;

            // EOF ends the session like /exit
            let Some(line) = lines.next_line().await? else {
                break;
            };

            match ChatInput::parse(&line) {
                ChatInput::Exit => break,
                ChatInput::Empty => continue,
                ChatInput::History => println!("{}", format_history(&turns)),
                ChatInput::Question(question) => {
                    let result = pipeline.ask(&question).await;
                    println!("{}", format_result(&result));
                    turns.push(Turn {
                        question,
                        answer: result.answer,
                    });
                }
            }
        }

        tracing::info!(turns = turns.len(), "Chat session ended");
        Ok(())
    }
}
