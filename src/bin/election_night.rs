//! Election Night binary
//!
//! Runs a short campaign, then projects turnout and an uncertainty-bearing
//! forecast for every jurisdiction.

use std::time::Instant;

use electorate::coalition::generator::{
    ElectorateProfile, JurisdictionDemographics, PolicyQuestion,
};
use electorate::coalition::standard_catalog;
use electorate::core::config::EngineConfig;
use electorate::core::types::{
    EventRecord, JurisdictionId, PartyId, PartyRecord, PolicyQuestionId, PolicyRecord,
};
use electorate::ideology::{Ideology, PolicyCategory};
use electorate::session::CampaignSession;
use electorate::turnout::ForecastOptions;

const NATIONAL: JurisdictionId = JurisdictionId(0);
const STATE: JurisdictionId = JurisdictionId(1);
const CITY: JurisdictionId = JurisdictionId(10);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("Election Night Projection");
    println!("=========================");

    let mut session = CampaignSession::new(20260805, EngineConfig::default(), NATIONAL, 8_000_000);
    session.add_state(STATE, 3_000_000).unwrap();
    session.add_city(CITY, STATE, 900_000).unwrap();

    let parties = vec![
        PartyRecord {
            id: PartyId(1),
            ideal_point: Ideology::SocialDemocrat.ideal_point(),
        },
        PartyRecord {
            id: PartyId(2),
            ideal_point: Ideology::Conservative.ideal_point(),
        },
    ];
    let profile = ElectorateProfile {
        questions: vec![
            PolicyQuestion {
                id: PolicyQuestionId(1),
                category: PolicyCategory::Taxation,
                baseline: 0.0,
            },
            PolicyQuestion {
                id: PolicyQuestionId(2),
                category: PolicyCategory::LawAndOrder,
                baseline: 0.5,
            },
        ],
    };

    for id in [NATIONAL, STATE, CITY] {
        session
            .generate_jurisdiction(
                id,
                &standard_catalog(),
                &profile,
                &JurisdictionDemographics::default(),
                &parties,
            )
            .expect("static setup");
    }

    // A month of campaign: one economic shock, one welfare bill
    let start = Instant::now();
    for tick in 0..30u64 {
        let events = if tick == 10 {
            vec![EventRecord {
                event_type: "economic_recession".to_string(),
                jurisdiction: NATIONAL,
                magnitude: 1.0,
            }]
        } else {
            Vec::new()
        };
        let policies = if tick == 20 {
            vec![(
                NATIONAL,
                PolicyRecord {
                    category: PolicyCategory::Welfare,
                    direction: 0.8,
                },
            )]
        } else {
            Vec::new()
        };
        session.run_tick(&events, &policies);
    }
    let elapsed = start.elapsed();
    println!(
        "Simulated 30 ticks in {:.2}ms (avg {:.2}ms/tick)",
        elapsed.as_secs_f64() * 1000.0,
        session.metrics.avg_tick_ms()
    );
    println!();

    let electorates = [(NATIONAL, 8_000_000u64), (STATE, 3_000_000), (CITY, 900_000)];
    for (jurisdiction, eligible) in electorates {
        let turnout = session.turnout(jurisdiction, eligible).expect("store exists");
        let forecast = session
            .forecast(jurisdiction, eligible, &ForecastOptions::default())
            .expect("store exists");

        println!("--- Jurisdiction {} ---", jurisdiction.0);
        println!(
            "Expected votes: {} of {} ({:.1}% turnout, coverage {:.3})",
            turnout.total_votes,
            eligible,
            turnout.overall_rate * 100.0,
            turnout.coverage
        );
        println!(
            "Forecast: {} votes, {:.1}% [{:.1}%..{:.1}%]",
            forecast.projected_votes,
            forecast.projected_rate * 100.0,
            forecast.confidence_low * 100.0,
            forecast.confidence_high * 100.0
        );
        for coalition in &turnout.coalitions {
            println!(
                "  {:24} rate {:.2}  votes {}",
                format!("{:?}", coalition.archetype),
                coalition.turnout_rate,
                coalition.expected_votes
            );
        }
        println!();
    }

    // Full projection dump for downstream display tooling
    let national = session.turnout(NATIONAL, 8_000_000).expect("store exists");
    let json = serde_json::to_string_pretty(&national).expect("serializable report");
    std::fs::write("election_night.json", &json).expect("Failed to write output");
    println!("Full national projection written to election_night.json");
}
