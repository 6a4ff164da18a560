use std::sync::Arc;

use clap::Args;
use creative_dna::error::AppError;
use creative_dna::quiz::{ContactInfo, QuizService};

use crate::infra::{InMemoryAnalyticsPublisher, InMemorySessionRepository};

/// Comma-separated option picks, one per question in presentation order.
#[derive(Debug, Clone)]
pub(crate) struct AnswerScript(Vec<u8>);

pub(crate) fn parse_script(raw: &str) -> Result<AnswerScript, String> {
    let picks = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .map_err(|err| format!("'{part}' is not an option id ({err})"))
        })
        .collect::<Result<Vec<u8>, String>>()?;
    Ok(AnswerScript(picks))
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Option picks per question, e.g. "2,1,3,1,1,2,1,1". Defaults to a
    /// MAKER-leaning run.
    #[arg(long, value_parser = parse_script)]
    pub(crate) answers: Option<AnswerScript>,
    /// Name recorded on the info page of the scripted session.
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Email recorded on the info page of the scripted session.
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Region recorded on the info page of the scripted session.
    #[arg(long)]
    pub(crate) region: Option<String>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        answers,
        name,
        email,
        region,
    } = args;

    let repository = Arc::new(InMemorySessionRepository::default());
    let analytics = Arc::new(InMemoryAnalyticsPublisher::default());
    let service = QuizService::new(repository, analytics.clone());

    let picks = answers
        .map(|script| script.0)
        .unwrap_or_else(|| vec![2, 1, 3, 1, 1, 2, 1, 1]);

    println!("Creative DNA Test demo");
    let record = service.start()?;
    println!("session {}", record.session_id.0);

    let questions: Vec<_> = service
        .bank()
        .questions()
        .iter()
        .map(|question| (question.id, question.text))
        .collect();

    for (position, (question_id, text)) in questions.iter().enumerate() {
        let Some(option_id) = picks.get(position).copied() else {
            println!("Q{question_id} {text}");
            println!("   -> skipped (script exhausted)");
            continue;
        };

        let chosen = service
            .bank()
            .question(*question_id)
            .and_then(|question| question.option(option_id))
            .map(|option| option.text)
            .unwrap_or("(unknown option)");

        println!("Q{question_id} {text}");
        println!("   -> {chosen}");
        service.answer(&record.session_id, *question_id, option_id)?;
    }

    if name.is_some() || email.is_some() || region.is_some() {
        service.contact(
            &record.session_id,
            ContactInfo {
                name: name.unwrap_or_default(),
                email: email.unwrap_or_default(),
                region: region.unwrap_or_default(),
                email_subscription: true,
            },
        )?;
    }

    let outcome = service.complete(&record.session_id)?;

    println!("\nScore totals");
    for (category, total) in outcome.scores.to_map() {
        println!("  {:<6} {total:.2}", category.label());
    }

    println!(
        "\nResolved via {} -> {}",
        outcome.resolution.tier.label(),
        outcome.resolution.category.label()
    );
    println!("{}", outcome.profile.title);
    println!("{}", outcome.profile.description);
    println!("Traits: {}", outcome.profile.traits.join(", "));
    println!("Recommended: {}", outcome.profile.product);

    println!("\nAnalytics funnel captured {} event(s)", analytics.events().len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_script() {
        let script = parse_script("2,1,3,1,1,2,1,1").expect("valid script");
        assert_eq!(script.0, vec![2, 1, 3, 1, 1, 2, 1, 1]);
    }

    #[test]
    fn rejects_non_numeric_picks() {
        assert!(parse_script("2,one,3").is_err());
    }

    #[test]
    fn demo_runs_with_default_script() {
        run_demo(DemoArgs::default()).expect("demo completes");
    }
}
