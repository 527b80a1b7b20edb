fn main() {
    forensicdesk_web::main();
}
