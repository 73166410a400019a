fn main() {
    healthlocker::run();
}
