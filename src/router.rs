use crate::config::DEFAULT_PAGE_SIZE;
use crate::data::{demo_profile, TESTIMONIALS};
use crate::db::{Database, PropertyQuery, PropertySource, SqlitePropertySource};
use crate::domain::notifications::Role;
use crate::domain::paging::paginate;
use crate::domain::property::PropertyRecord;
use crate::domain::query::{parse_listing_params, select, sort_records, RawParams, SortKey};
use crate::domain::sales::SalesTab;
use crate::domain::ui_state::{Carousel, DashboardChrome, UserInfo};
use crate::errors::ServerError;
use crate::responses::{asset_response, html_response, json_response, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::{
    self,
    components::testimonial_slide,
    pages::{AccountSection, DashboardVm},
};
use astra::Request;
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

const FEATURED_LIMIT: usize = 3;
const RECENT_LIMIT: usize = 3;

#[derive(Serialize)]
struct ListingsJson<'a> {
    count: usize,
    properties: Vec<&'a PropertyRecord>,
}

pub fn handle(req: Request, db: &Database) -> ResultResp {
    handle_with_page_size(req, db, DEFAULT_PAGE_SIZE)
}

pub fn handle_with_page_size(req: Request, db: &Database, page_size: usize) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let raw = RawParams::from_query(req.uri().query().unwrap_or(""));
    let source = SqlitePropertySource::new(db.clone());

    let result = route(&method, &path, &raw, &source, page_size);

    match &result {
        Ok(resp) => info!(%method, %path, status = resp.status().as_u16(), "request"),
        Err(err) => debug!(%method, %path, %err, "request failed in handler"),
    }
    result
}

fn route(
    method: &str,
    path: &str,
    raw: &RawParams,
    source: &impl PropertySource,
    page_size: usize,
) -> ResultResp {
    if method != "GET" {
        return Err(ServerError::NotFound);
    }

    match path {
        "/" => {
            let index = raw.get("testimonial").and_then(|i| i.parse().ok()).unwrap_or(0);
            home(source, Carousel::at(index, TESTIMONIALS.len()))
        }
        "/properties" => listings(raw, source, page_size),
        "/properties/export.xlsx" => {
            let records = source.fetch_properties(&PropertyQuery::all())?;
            let params = parse_listing_params(raw);
            export_listings_xlsx(&select(&records, &params.criteria, params.sort))
        }
        "/api/properties" => {
            let records = source.fetch_properties(&PropertyQuery::all())?;
            let params = parse_listing_params(raw);
            let properties = select(&records, &params.criteria, params.sort);
            json_response(&ListingsJson {
                count: properties.len(),
                properties,
            })
        }
        "/testimonials" => {
            let index = raw.get("index").and_then(|i| i.parse().ok()).unwrap_or(0);
            html_response(testimonial_slide(Carousel::at(index, TESTIMONIALS.len())))
        }
        "/admin-dashboard/sales" => {
            let chrome = DashboardChrome::from_params(raw);
            let tab = raw.get("tab").map_or(SalesTab::Overview, SalesTab::from_param);
            let user = UserInfo::from_profile(Some(&demo_profile(Role::Admin)));
            html_response(templates::pages::admin_sales_page(
                tab,
                chrome,
                &user,
                Utc::now().date_naive(),
            ))
        }
        _ => {
            if let Some(name) = path.strip_prefix("/static/") {
                return asset_response(name);
            }
            if let Some(id) = path.strip_prefix("/properties/") {
                return property_detail(id, source);
            }
            dashboard_route(path, raw, source)
        }
    }
}

fn home(source: &impl PropertySource, testimonials: Carousel) -> ResultResp {
    let featured = source.fetch_properties(&PropertyQuery::featured())?;
    let refs: Vec<&PropertyRecord> = featured.iter().collect();
    let newest: Vec<&PropertyRecord> = sort_records(&refs, SortKey::Newest)
        .into_iter()
        .take(FEATURED_LIMIT)
        .collect();

    html_response(templates::pages::home_page(&newest, testimonials))
}

fn listings(raw: &RawParams, source: &impl PropertySource, page_size: usize) -> ResultResp {
    let records = source.fetch_properties(&PropertyQuery::all())?;
    let params = parse_listing_params(raw);
    let selected = select(&records, &params.criteria, params.sort);
    debug!(
        matched = selected.len(),
        total = records.len(),
        sort = params.sort.as_param(),
        "filtered listings"
    );

    let page = paginate(selected, params.page, page_size);
    html_response(templates::pages::listings_page(&params, &page))
}

fn property_detail(id: &str, source: &impl PropertySource) -> ResultResp {
    if id.is_empty() || id.contains('/') {
        return Err(ServerError::NotFound);
    }
    let record = source.find_property(id)?.ok_or(ServerError::NotFound)?;
    html_response(templates::pages::property_page(&record))
}

/// `/{role}-dashboard` and `/{role}-dashboard/{profile|settings}`.
fn dashboard_route(path: &str, raw: &RawParams, source: &impl PropertySource) -> ResultResp {
    let rest = path.strip_prefix('/').ok_or(ServerError::NotFound)?;
    let (head, section) = match rest.split_once('/') {
        Some((head, section)) => (head, Some(section)),
        None => (rest, None),
    };
    let role = head
        .strip_suffix("-dashboard")
        .and_then(|slug| slug.parse::<Role>().ok())
        .ok_or(ServerError::NotFound)?;

    match section {
        None => dashboard(role, raw, source),
        Some(section) => {
            let section: AccountSection = section.parse().map_err(|_| ServerError::NotFound)?;
            let user = UserInfo::from_profile(Some(&demo_profile(role)));
            html_response(templates::pages::account_page(
                role,
                section,
                DashboardChrome::from_params(raw),
                &user,
            ))
        }
    }
}

fn dashboard(role: Role, raw: &RawParams, source: &impl PropertySource) -> ResultResp {
    let records = source.fetch_properties(&PropertyQuery::all())?;
    let refs: Vec<&PropertyRecord> = records.iter().collect();
    let recent = sort_records(&refs, SortKey::Newest)
        .into_iter()
        .take(RECENT_LIMIT)
        .collect();

    let vm = DashboardVm {
        role,
        chrome: DashboardChrome::from_params(raw),
        user: UserInfo::from_profile(Some(&demo_profile(role))),
        listings: &records,
        recent,
    };
    html_response(templates::pages::dashboard_page(&vm))
}
