//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 바인딩 주소와 라우트 목록을 시각적으로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 라우트 한 줄을 트리 형태로 출력합니다
///
/// Output:
/// ```text
///    ├─ GET    /hello
/// ```
pub fn print_route(method: &str, path: &str) {
    println!("{}", route_line(method, path));
}

/// 기동 배너 전체를 출력합니다
pub fn print_startup_banner(bind_address: &str, routes: &[(&str, &str)]) {
    println!();
    print_boxed_title("🚀 HELLO API SERVER");
    println!("   🌐 Listening on http://{}", bind_address);
    for (method, path) in routes {
        print_route(method, path);
    }
    println!();
}

fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 (박스 내부 콘텐츠)
    let border = "═".repeat(50);
    format!("╔{border}╗\n║{title:^50}║\n╚{border}╝")
}

fn route_line(method: &str, path: &str) -> String {
    format!("   ├─ {:<6} {}", method, path)
}
