fn main() {
    investment_advisor_web::run();
}
