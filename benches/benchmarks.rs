criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_five_cards,
        evaluating_seven_cards,
        ranking_river_strength,
        sampling_flop_equity,
        simulating_flop_equity,
        counting_flop_outs,
        exhausting_five_card_hands,
}

fn evaluating_five_cards(c: &mut criterion::Criterion) {
    let hand = Hand::try_from("AsKdQcJhTs").unwrap();
    c.bench_function("evaluate a 5-card Hand", |b| {
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn evaluating_seven_cards(c: &mut criterion::Criterion) {
    let hand = Hand::try_from("AsKdQcJh9s3c2d").unwrap();
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter(|| Strength::try_from(hand))
    });
}

fn ranking_river_strength(c: &mut criterion::Criterion) {
    let table = RankTable::grow().unwrap();
    let strength = Strength::try_from(Hand::try_from("AsKdQcJh9s3c2d").unwrap()).unwrap();
    c.bench_function("rank a River Strength", |b| {
        b.iter(|| table.rank_of(&strength))
    });
}

fn sampling_flop_equity(c: &mut criterion::Criterion) {
    let observation = Observation::try_from("AhKd~7c6d2s").unwrap();
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("sample Flop equity (1000 trials)", |b| {
        b.iter(|| observation.equity(handrank::DEFAULT_TRIALS, rng))
    });
}

fn simulating_flop_equity(c: &mut criterion::Criterion) {
    let observation = Observation::try_from("AhKd~7c6d2s").unwrap();
    c.bench_function("simulate Flop equity in parallel (1000 trials)", |b| {
        b.iter(|| observation.simulate(handrank::DEFAULT_TRIALS, 0))
    });
}

fn counting_flop_outs(c: &mut criterion::Criterion) {
    let observation = Observation::try_from("9h8h~7c6d2s").unwrap();
    c.bench_function("count Flop outs", |b| b.iter(|| observation.outs()));
}

fn exhausting_five_card_hands(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 5-card Hands", |b| {
        b.iter(|| HandIterator::from((5, Hand::empty())).count())
    });
}

use handrank::cards::evaluator::Evaluator;
use handrank::cards::hand::Hand;
use handrank::cards::hands::HandIterator;
use handrank::cards::observation::Observation;
use handrank::cards::strength::Strength;
use handrank::lookup::RankTable;
use handrank::save::Disk;
use rand::SeedableRng;
use rand::rngs::SmallRng;
