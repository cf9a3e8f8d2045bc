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
        evaluating_five_card_high,
        evaluating_four_card_high,
        evaluating_badugi,
        evaluating_hidugi,
        dealing_fresh_deck,
        simulating_badugi_equity,
        simulating_hidugi_equity,
        selecting_best_variant,
}

fn evaluating_five_card_high(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 5-card high Hand", |b| {
        let hand = Hand::try_from("As Ks Qd Jh 9c").unwrap();
        b.iter(|| Strength::from((Arity::Five, hand)).score())
    });
}

fn evaluating_four_card_high(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 4-card high Hand", |b| {
        let hand = Hand::try_from("As Ad Kh 9c").unwrap();
        b.iter(|| Strength::from((Arity::Four, hand)).score())
    });
}

fn evaluating_badugi(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a Badugi", |b| {
        let hand = Hand::try_from("As 2d 3h 4c").unwrap();
        b.iter(|| Badugi::from(hand).score())
    });
}

fn evaluating_hidugi(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a HiDuGi split", |b| {
        let hand = Hand::try_from("As 2d 3h 4c").unwrap();
        b.iter(|| HiDuGi::from(hand).score())
    });
}

fn dealing_fresh_deck(c: &mut criterion::Criterion) {
    c.bench_function("deal 4 villain cards from a fresh Deck", |b| {
        let hero = Hand::try_from("As 2d 3h 4c").unwrap();
        let ref mut sampler = Sampler::seeded(0);
        b.iter(|| Deck::without(hero).draw(4, sampler))
    });
}

fn simulating_badugi_equity(c: &mut criterion::Criterion) {
    let pocket = Pocket::try_from("2s 3d 4h 5c").unwrap();
    let simulator = Simulator::from((pocket, Settings::seeded(0).with_iterations(1000)));
    c.bench_function("simulate 1000 Badugi pots", |b| {
        b.iter(|| simulator.equity(Variant::Badugi))
    });
}

fn simulating_hidugi_equity(c: &mut criterion::Criterion) {
    let pocket = Pocket::try_from("As 2d 3h 4c").unwrap();
    let simulator = Simulator::from((pocket, Settings::seeded(0).with_iterations(1000)));
    c.bench_function("simulate 1000 HiDuGi split pots", |b| {
        b.iter(|| simulator.equity(Variant::HiDuGi))
    });
}

fn selecting_best_variant(c: &mut criterion::Criterion) {
    let pocket = Pocket::try_from("As Kd 5h 2c").unwrap();
    let selector = Selector::from(Settings::seeded(0).with_iterations(1000));
    c.bench_function("select across every variant at 1000 iterations", |b| {
        b.iter(|| selector.select(pocket))
    });
}

use gamepick::cards::*;
use gamepick::evaluation::*;
use gamepick::simulation::*;
use gamepick::variants::*;
