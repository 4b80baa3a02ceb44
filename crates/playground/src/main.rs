use model::filter::{nearest_shops, ShopFilter};

fn main() {
    env_logger::init();

    let shops = dataset::bundled().expect("bundled dataset must parse");
    let now = chrono::Local::now().naive_local();

    // open, curated shops nearest to downtown Minneapolis
    let nearby = nearest_shops(shops, &ShopFilter::default(), now, 44.9778, -93.265);

    let json = serde_json::to_string_pretty(&nearby).expect("shops serialize");
    println!("json: {}", json);
}
