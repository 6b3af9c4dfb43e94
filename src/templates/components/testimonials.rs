use crate::data::TESTIMONIALS;
use crate::domain::ui_state::Carousel;
use maud::{html, Markup};

const STAR_SLOTS: u8 = 5;

fn stars(rating: u8) -> Markup {
    html! {
        div class="stars" aria-label=(format!("{rating} out of {STAR_SLOTS}")) {
            @for i in 0..STAR_SLOTS {
                @if i < rating {
                    span class="star filled" { "★" }
                } @else {
                    span class="star" { "☆" }
                }
            }
        }
    }
}

fn slide_href(c: Carousel) -> String {
    format!("/testimonials?index={}", c.index())
}

// Without htmx the links reload the home page on the chosen slide.
fn page_href(c: Carousel) -> String {
    format!("/?testimonial={}#testimonials", c.index())
}

/// The swappable part of the carousel. Prev/next/dot links fetch the
/// neighbouring slide through htmx.
pub fn testimonial_slide(c: Carousel) -> Markup {
    let Some(t) = TESTIMONIALS.get(c.index()) else {
        return html! { div id="testimonial-slide" {} };
    };

    html! {
        div id="testimonial-slide" class="testimonial-slide" {
            blockquote {
                (stars(t.rating))
                p { "\u{201c}" (t.testimonial) "\u{201d}" }
                footer {
                    img class="avatar" src=(t.image) alt=(t.name);
                    div {
                        p class="name" { (t.name) }
                        p class="muted" { (t.location) }
                    }
                }
            }
            div class="carousel-controls" {
                a class="icon-btn" href=(page_href(c.prev()))
                    hx-get=(slide_href(c.prev())) hx-target="#testimonial-slide" hx-swap="outerHTML" {
                    "‹"
                    span class="sr-only" { "Previous testimonial" }
                }
                @for i in 0..c.len() {
                    a class=(if i == c.index() { "dot active" } else { "dot" })
                        href=(page_href(c.go_to(i)))
                        hx-get=(slide_href(c.go_to(i))) hx-target="#testimonial-slide" hx-swap="outerHTML" {
                        span class="sr-only" { "Go to testimonial " (i + 1) }
                    }
                }
                a class="icon-btn" href=(page_href(c.next()))
                    hx-get=(slide_href(c.next())) hx-target="#testimonial-slide" hx-swap="outerHTML" {
                    "›"
                    span class="sr-only" { "Next testimonial" }
                }
            }
        }
    }
}

pub fn testimonials_section(c: Carousel) -> Markup {
    html! {
        section id="testimonials" class="testimonials" {
            h2 { "What Our Clients Say" }
            p class="muted" {
                "Hear from homeowners who found their perfect property with us."
            }
            (testimonial_slide(c))
        }
    }
}
