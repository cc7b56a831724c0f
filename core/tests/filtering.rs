//! Filter semantics: conjunctive predicates, inclusive date bounds,
//! stable ordering, empty selections, and monotonicity under widening.

use chrono::NaiveDate;
use explorer_core::catalog::{Category, PaymentMethod, Region, Status};
use explorer_core::dataset::Dataset;
use explorer_core::filter::{filter_rows, FilterSpecification};
use explorer_core::generator;
use explorer_core::transaction::Transaction;

fn txn(id: u64, date: &str, category: Category, region: Region, status: Status) -> Transaction {
    let timestamp = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .expect("test date")
        .and_hms_opt(12, 0, 0)
        .expect("test time");
    Transaction {
        transaction_id: id,
        timestamp,
        customer_id: 10_000 + id as u32,
        category,
        product_id: 100_000,
        unit_price: 10.0,
        quantity: 1,
        discount: 0.0,
        subtotal: 10.0,
        tax_rate: 0.0,
        tax: 0.0,
        total: 10.0,
        payment_method: PaymentMethod::CreditCard,
        region,
        city: "Chicago",
        status,
        is_member: false,
        rating: None,
    }
}

fn small_table() -> Dataset {
    Dataset::from_rows(vec![
        txn(1, "2024-03-01", Category::Books, Region::Midwest, Status::Completed),
        txn(2, "2024-03-02", Category::Electronics, Region::Midwest, Status::Pending),
        txn(3, "2024-03-03", Category::Books, Region::Northeast, Status::Completed),
        txn(4, "2024-03-04", Category::Books, Region::Midwest, Status::Completed),
        txn(5, "2024-03-05", Category::Grocery, Region::Midwest, Status::Returned),
    ])
}

fn ids(table: &Dataset, matched: &[usize]) -> Vec<u64> {
    matched.iter().map(|&i| table.rows()[i].transaction_id).collect()
}

#[test]
fn date_bounds_are_inclusive_on_both_ends() {
    let table = small_table();
    let mut spec = FilterSpecification::all_of(&table);
    spec.start_date = NaiveDate::from_ymd_opt(2024, 3, 2).expect("date");
    spec.end_date = NaiveDate::from_ymd_opt(2024, 3, 4).expect("date");

    assert_eq!(ids(&table, &filter_rows(&table, &spec)), vec![2, 3, 4]);
}

#[test]
fn all_four_predicates_apply_conjunctively() {
    let table = small_table();
    let mut spec = FilterSpecification::all_of(&table);
    spec.categories = [Category::Books].into_iter().collect();
    spec.regions = [Region::Midwest].into_iter().collect();
    spec.statuses = [Status::Completed].into_iter().collect();

    // Row 3 is Books but Northeast; row 5 is Midwest but Grocery/Returned.
    assert_eq!(ids(&table, &filter_rows(&table, &spec)), vec![1, 4]);
}

#[test]
fn result_preserves_base_table_order() {
    let table = generator::generate(2_000, 5).expect("generate");
    let mut spec = FilterSpecification::all_of(&table);
    spec.statuses = [Status::Completed, Status::Shipped].into_iter().collect();

    let matched = filter_rows(&table, &spec);
    assert!(
        matched.windows(2).all(|w| w[0] < w[1]),
        "filtered indices are not in base-table order"
    );
}

#[test]
fn empty_selection_on_any_dimension_yields_empty_not_error() {
    let table = small_table();

    let mut no_categories = FilterSpecification::all_of(&table);
    no_categories.categories.clear();
    assert!(filter_rows(&table, &no_categories).is_empty());

    let mut no_regions = FilterSpecification::all_of(&table);
    no_regions.regions.clear();
    assert!(filter_rows(&table, &no_regions).is_empty());

    let mut no_statuses = FilterSpecification::all_of(&table);
    no_statuses.statuses.clear();
    assert!(filter_rows(&table, &no_statuses).is_empty());
}

#[test]
fn widening_any_dimension_never_decreases_the_match_count() {
    let table = generator::generate(3_000, 11).expect("generate");

    let mut narrow = FilterSpecification::all_of(&table);
    narrow.start_date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");
    narrow.end_date = NaiveDate::from_ymd_opt(2024, 12, 31).expect("date");
    narrow.categories = [Category::Electronics, Category::Books].into_iter().collect();
    narrow.regions = [Region::Midwest, Region::WestCoast].into_iter().collect();
    narrow.statuses = [Status::Completed].into_iter().collect();
    let narrow_count = filter_rows(&table, &narrow).len();

    // Widen one dimension at a time, then all of them.
    let mut wider_dates = narrow.clone();
    wider_dates.start_date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
    wider_dates.end_date = NaiveDate::from_ymd_opt(2025, 12, 31).expect("date");
    assert!(filter_rows(&table, &wider_dates).len() >= narrow_count);

    let mut wider_categories = narrow.clone();
    wider_categories.categories = Category::ALL.into_iter().collect();
    assert!(filter_rows(&table, &wider_categories).len() >= narrow_count);

    let mut wider_regions = narrow.clone();
    wider_regions.regions = Region::ALL.into_iter().collect();
    assert!(filter_rows(&table, &wider_regions).len() >= narrow_count);

    let mut wider_statuses = narrow.clone();
    wider_statuses.statuses = Status::ALL.into_iter().collect();
    assert!(filter_rows(&table, &wider_statuses).len() >= narrow_count);

    let widest = FilterSpecification::all_of(&table);
    let widest_count = filter_rows(&table, &widest).len();
    assert!(widest_count >= narrow_count);
    assert_eq!(widest_count, table.len(), "the widest spec must match every row");
}

#[test]
fn filtering_is_repeatable_and_leaves_the_table_untouched() {
    let table = small_table();
    let before = table.clone();
    let spec = FilterSpecification::all_of(&table);

    let first = filter_rows(&table, &spec);
    let second = filter_rows(&table, &spec);
    assert_eq!(first, second);
    assert_eq!(table, before, "filter mutated the base table");
}
