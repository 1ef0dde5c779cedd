//! Headless Campaign Polling Runner
//!
//! Simulates a national campaign over N ticks and outputs polling results
//! as JSON or text.

use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use electorate::coalition::generator::{
    ElectorateProfile, JurisdictionDemographics, PolicyQuestion,
};
use electorate::coalition::standard_catalog;
use electorate::core::config::EngineConfig;
use electorate::core::types::{
    CandidateAttributes, CandidateId, CandidateRecord, EventRecord, JurisdictionId, PartyId,
    PartyRecord, PolicyQuestionId,
};
use electorate::ideology::{Ideology, PolicyCategory};
use electorate::session::CampaignSession;

/// Headless Campaign Polling Runner
#[derive(Parser, Debug)]
#[command(name = "campaign_poll")]
#[command(about = "Simulate a campaign and report coalition polling")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulation ticks
    #[arg(long, default_value_t = 20)]
    ticks: u64,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable verbose engine logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct PollingRun {
    seed: u64,
    ticks: u64,
    final_polling: Vec<CandidateShare>,
    avg_tick_ms: f64,
    worst_tick_ms: f64,
}

#[derive(Serialize)]
struct CandidateShare {
    candidate: u32,
    ideology: String,
    percent: u32,
}

const NATIONAL: JurisdictionId = JurisdictionId(0);

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let seed = args.seed.unwrap_or(12345);
    let mut session = build_session(seed);
    let candidates = build_candidates();

    println!("Campaign Polling Simulation");
    println!("===========================");
    println!("Seed: {}, ticks: {}", seed, args.ticks);
    println!();

    for tick in 0..args.ticks {
        let events = scripted_events(tick);
        session.run_tick(&events, &[]);

        if args.format == "text" && tick % 5 == 4 {
            let polling = session
                .aggregate_polling(NATIONAL, &candidates, Instant::now())
                .expect("national store exists");
            let line: Vec<String> = polling
                .iter()
                .map(|(id, pct)| format!("C{}={}%", id.0, pct))
                .collect();
            println!("tick {:3}: {}", tick + 1, line.join("  "));
        }
    }

    let polling = session
        .aggregate_polling(NATIONAL, &candidates, Instant::now())
        .expect("national store exists");

    let run = PollingRun {
        seed,
        ticks: args.ticks,
        final_polling: polling
            .iter()
            .zip(&candidates)
            .map(|((id, pct), c)| CandidateShare {
                candidate: id.0,
                ideology: format!("{:?}", ideology_of(c)),
                percent: *pct,
            })
            .collect(),
        avg_tick_ms: session.metrics.avg_tick_ms(),
        worst_tick_ms: session.metrics.worst_tick_ms(),
    };

    if args.format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&run).expect("serializable output")
        );
    } else {
        println!();
        println!("Final polling:");
        for share in &run.final_polling {
            println!("  Candidate {} ({}): {}%", share.candidate, share.ideology, share.percent);
        }
        println!(
            "Avg tick: {:.2}ms, worst: {:.2}ms",
            run.avg_tick_ms, run.worst_tick_ms
        );
    }
}

fn build_session(seed: u64) -> CampaignSession {
    let mut session = CampaignSession::new(seed, EngineConfig::default(), NATIONAL, 10_000_000);
    session.add_state(JurisdictionId(1), 4_000_000).unwrap();
    session.add_state(JurisdictionId(2), 6_000_000).unwrap();
    session
        .add_city(JurisdictionId(10), JurisdictionId(1), 1_200_000)
        .unwrap();
    session
        .add_city(JurisdictionId(11), JurisdictionId(2), 2_500_000)
        .unwrap();

    let parties = build_parties();
    let profile = build_profile();

    let demographics = [
        (NATIONAL, JurisdictionDemographics::default()),
        (
            JurisdictionId(1),
            JurisdictionDemographics {
                urbanization: 0.35,
                college_share: 0.28,
                ..Default::default()
            },
        ),
        (
            JurisdictionId(2),
            JurisdictionDemographics {
                urbanization: 0.7,
                college_share: 0.42,
                ..Default::default()
            },
        ),
        (
            JurisdictionId(10),
            JurisdictionDemographics {
                urbanization: 0.85,
                age_young: 0.4,
                age_middle: 0.4,
                age_senior: 0.2,
                college_share: 0.45,
            },
        ),
        (
            JurisdictionId(11),
            JurisdictionDemographics {
                urbanization: 0.95,
                age_young: 0.45,
                age_middle: 0.4,
                age_senior: 0.15,
                college_share: 0.5,
            },
        ),
    ];

    for (id, demo) in demographics {
        session
            .generate_jurisdiction(id, &standard_catalog(), &profile, &demo, &parties)
            .expect("jurisdiction setup is static");
    }
    session
}

fn build_parties() -> Vec<PartyRecord> {
    vec![
        PartyRecord {
            id: PartyId(1),
            ideal_point: Ideology::Progressive.ideal_point(),
        },
        PartyRecord {
            id: PartyId(2),
            ideal_point: Ideology::Conservative.ideal_point(),
        },
        PartyRecord {
            id: PartyId(3),
            ideal_point: Ideology::Centrist.ideal_point(),
        },
    ]
}

fn build_profile() -> ElectorateProfile {
    ElectorateProfile {
        questions: vec![
            PolicyQuestion {
                id: PolicyQuestionId(1),
                category: PolicyCategory::Economy,
                baseline: 0.5,
            },
            PolicyQuestion {
                id: PolicyQuestionId(2),
                category: PolicyCategory::Environment,
                baseline: 1.0,
            },
            PolicyQuestion {
                id: PolicyQuestionId(3),
                category: PolicyCategory::Immigration,
                baseline: -0.5,
            },
            PolicyQuestion {
                id: PolicyQuestionId(4),
                category: PolicyCategory::Welfare,
                baseline: 1.5,
            },
        ],
    }
}

fn build_candidates() -> Vec<CandidateRecord> {
    let mut progressive_stances = ahash::AHashMap::new();
    progressive_stances.insert(PolicyQuestionId(1), 2.5);
    progressive_stances.insert(PolicyQuestionId(2), 4.0);
    progressive_stances.insert(PolicyQuestionId(4), 3.5);

    let mut conservative_stances = ahash::AHashMap::new();
    conservative_stances.insert(PolicyQuestionId(1), -2.0);
    conservative_stances.insert(PolicyQuestionId(3), -3.5);
    conservative_stances.insert(PolicyQuestionId(4), -1.0);

    let mut centrist_stances = ahash::AHashMap::new();
    centrist_stances.insert(PolicyQuestionId(1), 0.5);
    centrist_stances.insert(PolicyQuestionId(2), 0.5);

    vec![
        CandidateRecord {
            id: CandidateId(1),
            ideal_point: Ideology::Progressive.ideal_point(),
            policy_stances: progressive_stances,
            party: Some(PartyId(1)),
            attributes: CandidateAttributes {
                charisma: 72.0,
                intelligence: 65.0,
                integrity: 55.0,
            },
        },
        CandidateRecord {
            id: CandidateId(2),
            ideal_point: Ideology::Conservative.ideal_point(),
            policy_stances: conservative_stances,
            party: Some(PartyId(2)),
            attributes: CandidateAttributes {
                charisma: 60.0,
                intelligence: 58.0,
                integrity: 70.0,
            },
        },
        CandidateRecord {
            id: CandidateId(3),
            ideal_point: Ideology::Centrist.ideal_point(),
            policy_stances: centrist_stances,
            party: Some(PartyId(3)),
            attributes: CandidateAttributes {
                charisma: 55.0,
                intelligence: 75.0,
                integrity: 62.0,
            },
        },
    ]
}

fn scripted_events(tick: u64) -> Vec<EventRecord> {
    match tick % 7 {
        0 => vec![EventRecord {
            event_type: "economic_recession".to_string(),
            jurisdiction: NATIONAL,
            magnitude: 0.6,
        }],
        2 => vec![EventRecord {
            event_type: "strike_wave".to_string(),
            jurisdiction: JurisdictionId(10),
            magnitude: 1.0,
        }],
        4 => vec![EventRecord {
            event_type: "climate_disaster".to_string(),
            jurisdiction: JurisdictionId(2),
            magnitude: 0.8,
        }],
        5 => vec![EventRecord {
            event_type: "scandal".to_string(),
            jurisdiction: NATIONAL,
            magnitude: 0.4,
        }],
        _ => Vec::new(),
    }
}

fn ideology_of(candidate: &CandidateRecord) -> Ideology {
    // Nearest labeled ideology to the candidate's ideal point
    let all = [
        Ideology::Progressive,
        Ideology::Conservative,
        Ideology::Centrist,
        Ideology::Libertarian,
        Ideology::SocialDemocrat,
        Ideology::Green,
        Ideology::Traditionalist,
        Ideology::Technocrat,
    ];
    all.into_iter()
        .min_by(|a, b| {
            let da = candidate.ideal_point.distance(&a.ideal_point());
            let db = candidate.ideal_point.distance(&b.ideal_point());
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(Ideology::Centrist)
}
