use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use menu_cart::{Cart, CartCommand, ExtraOption, LineKey, Price, Product};

/// Generates cart commands for benchmarking.
///
/// Cycles over `num_products` products and `variants` extras/note
/// combinations, so the cart holds at most `num_products * variants`
/// lines. Every `remove_every`th command takes a
/// unit off the line added just before it (0 = never remove).
pub struct CommandGenerator {
    products: Vec<Product>,
    variants: u32,
    remove_every: u32,
    remaining: u32,
    step: u32,
    last_key: Option<LineKey>,
}

impl CommandGenerator {
    pub fn new(num_products: u32, variants: u32, count: u32, remove_every: u32) -> Self {
        let products = (0..num_products)
            .map(|i| {
                Product::new(
                    format!("p{i}"),
                    format!("Product {i}"),
                    Price::new(1000),
                    "Hamburguesas",
                )
            })
            .collect();
        Self {
            products,
            variants,
            remove_every,
            remaining: count,
            step: 0,
            last_key: None,
        }
    }

    fn variant(&self, n: u32) -> (Vec<ExtraOption>, String) {
        let extras = (0..n % 3)
            .map(|i| ExtraOption::new(format!("Extra {i}"), Price::new(100 * i64::from(i + 1))))
            .collect();
        // alternate casing so merges go through note normalization
        let note = match n % 2 {
            0 => format!("Nota {n}"),
            _ => format!(" nota {n} "),
        };
        (extras, note)
    }
}

impl Iterator for CommandGenerator {
    type Item = CartCommand;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.products.is_empty() {
            return None;
        }
        self.remaining -= 1;
        self.step += 1;

        if self.remove_every > 0 && self.step % self.remove_every == 0 {
            if let Some(key) = self.last_key.take() {
                return Some(CartCommand::Remove(key));
            }
        }

        let idx = (self.step as usize) % self.products.len();
        let product = self.products[idx].clone();
        let (extras, note) = self.variant(self.step % self.variants.max(1));
        self.last_key = Some(LineKey::new(&product.id, &extras, &note));

        Some(CartCommand::Add {
            product,
            extras,
            note,
        })
    }
}

fn bench_adds(c: &mut Criterion) {
    let mut group = c.benchmark_group("adds");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut cart = Cart::new();
                for command in CommandGenerator::new(10, 4, count, 0) {
                    cart.apply(black_box(command));
                }
                cart
            });
        });
    }

    group.finish();
}

fn bench_cart_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_size");

    // line lookup is linear, so the number of distinct lines matters
    for (products, variants) in [(5, 2), (20, 5), (50, 10)] {
        let label = format!("{}lines", products * variants);
        group.bench_with_input(
            BenchmarkId::from_parameter(&label),
            &(products, variants),
            |b, &(products, variants)| {
                b.iter(|| {
                    let mut cart = Cart::new();
                    for command in CommandGenerator::new(products, variants, 10_000, 0) {
                        cart.apply(black_box(command));
                    }
                    cart
                });
            },
        );
    }

    group.finish();
}

fn bench_with_removes(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_removes");

    group.bench_function("10k_remove_every_4", |b| {
        b.iter(|| {
            let mut cart = Cart::new();
            for command in CommandGenerator::new(10, 4, 10_000, 4) {
                cart.apply(black_box(command));
            }
            cart
        });
    });

    group.finish();
}

fn bench_totals(c: &mut Criterion) {
    let mut cart = Cart::new();
    for command in CommandGenerator::new(50, 10, 10_000, 0) {
        cart.apply(command);
    }

    c.bench_function("totals_large_cart", |b| {
        b.iter(|| (black_box(&cart).total(), black_box(&cart).item_count()));
    });
}

criterion_group!(
    benches,
    bench_adds,
    bench_cart_sizes,
    bench_with_removes,
    bench_totals
);
criterion_main!(benches);
